use crate::commands::Command;
use agentskills_api::types::{
    ChangePasswordInput, CreateSkillInput, CreateTokenInput, DeleteAccountInput, ListSkillsParams,
    LoginInput, RegisterInput, TokenPair, UpdateSkillInput, UpdateUserInput,
};
use agentskills_api::ApiClient;
use agentskills_common::store::file::FileStore;
use agentskills_rest_client::reqwest::ReqwestClient;
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::ffi::OsStr;
use std::path::PathBuf;

pub struct Runner {
    client: ApiClient<FileStore<TokenPair>, ReqwestClient>,
    token_path: PathBuf,
}

impl Runner {
    pub fn new(api_base_url: String, token_file: Option<PathBuf>) -> Result<Self> {
        let token_path = match token_file {
            Some(path) => path,
            None => dirs::config_dir()
                .with_context(|| format!("No config dir: {:?}", dirs::config_dir()))?
                .join("agentskills")
                .join("tokens.json"),
        };
        tracing::debug!(base_uri = %api_base_url, token_path = ?token_path, "initializing client");
        let client = ApiClient::new(ReqwestClient::new(api_base_url), FileStore::new(&token_path));
        Ok(Self { client, token_path })
    }
    pub async fn run(&self, command: Command) -> Result<()> {
        if !command.is_anonymous() && self.client.get_stored_tokens().await.is_none() {
            bail!("Not logged in");
        }
        match command {
            Command::Register(args) => self.print(
                &self
                    .client
                    .register(RegisterInput {
                        email: args.email,
                        username: args.username,
                        password: args.password,
                    })
                    .await?,
            ),
            Command::Login(args) => {
                let tokens = self
                    .client
                    .login(LoginInput { email: args.email, password: args.password })
                    .await?;
                self.client.store_tokens(tokens).await?;
                println!("Login successful! Saved tokens to {:?}", self.token_path);
                Ok(())
            }
            Command::Logout => {
                self.client.sign_out().await?;
                println!("Logged out.");
                Ok(())
            }
            Command::Me => self.print(&self.client.get_me().await?),
            Command::UpdateMe(args) => self.print(
                &self
                    .client
                    .update_me(UpdateUserInput { username: args.username, email: args.email })
                    .await?,
            ),
            Command::ChangePassword(args) => self.print(
                &self
                    .client
                    .change_password(ChangePasswordInput {
                        current_password: args.current_password,
                        new_password: args.new_password,
                    })
                    .await?,
            ),
            Command::DeleteAccount(args) => {
                let result = self
                    .client
                    .delete_account(DeleteAccountInput { password: args.password })
                    .await?;
                self.client.sign_out().await?;
                self.print(&result)
            }
            Command::ListSkills(args) => self.print(
                &self
                    .client
                    .list_skills(ListSkillsParams { q: args.query, skip: args.skip, limit: args.limit })
                    .await?,
            ),
            Command::CreateSkill(args) => self.print(
                &self
                    .client
                    .create_skill(CreateSkillInput { name: args.name, description: args.description })
                    .await?,
            ),
            Command::GetSkill(args) => self.print(&self.client.get_skill(args.id).await?),
            Command::UpdateSkill(args) => self.print(
                &self
                    .client
                    .update_skill(
                        args.id,
                        UpdateSkillInput { name: args.name, description: args.description },
                    )
                    .await?,
            ),
            Command::DeleteSkill(args) => self.print(&self.client.delete_skill(args.id).await?),
            Command::ListSkillFiles(args) => {
                self.print(&self.client.list_skill_files(args.id).await?)
            }
            Command::UploadSkillFile(args) => {
                let file_name = args
                    .file
                    .file_name()
                    .and_then(OsStr::to_str)
                    .with_context(|| format!("Invalid file path: {:?}", args.file))?
                    .to_string();
                let content = tokio::fs::read(&args.file)
                    .await
                    .with_context(|| format!("Failed to read {:?}", args.file))?;
                self.print(&self.client.upload_skill_file(args.skill_id, file_name, content).await?)
            }
            Command::ListTokens => self.print(&self.client.list_tokens().await?),
            Command::CreateToken(args) => self.print(
                &self
                    .client
                    .create_token(CreateTokenInput { name: args.name, expires_at: args.expires_at })
                    .await?,
            ),
            Command::RevokeToken(args) => self.print(&self.client.revoke_token(args.id).await?),
        }
    }
    fn print<T: Serialize>(&self, result: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(result)?);
        Ok(())
    }
}
