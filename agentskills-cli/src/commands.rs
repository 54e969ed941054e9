use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub enum Command {
    /// Create an account.
    Register(RegisterArgs),
    /// Login and save the issued tokens.
    Login(LoginArgs),
    /// Forget the saved tokens.
    Logout,
    /// Get the current user.
    Me,
    /// Update the current user's profile.
    UpdateMe(UpdateMeArgs),
    /// Change the current user's password.
    ChangePassword(ChangePasswordArgs),
    /// Delete the current account and forget the saved tokens.
    DeleteAccount(DeleteAccountArgs),
    /// List skills.
    ListSkills(ListSkillsArgs),
    /// Create a skill.
    CreateSkill(CreateSkillArgs),
    /// Get a skill.
    GetSkill(SkillArgs),
    /// Update a skill.
    UpdateSkill(UpdateSkillArgs),
    /// Delete a skill.
    DeleteSkill(SkillArgs),
    /// List the files of a skill.
    ListSkillFiles(SkillArgs),
    /// Upload a file into a skill.
    UploadSkillFile(UploadSkillFileArgs),
    /// List API tokens.
    ListTokens,
    /// Create an API token.
    CreateToken(CreateTokenArgs),
    /// Revoke an API token.
    RevokeToken(TokenArgs),
}

impl Command {
    /// Whether the command works without saved tokens.
    pub(crate) fn is_anonymous(&self) -> bool {
        matches!(self, Self::Register(_) | Self::Login(_) | Self::Logout)
    }
}

#[derive(Parser, Debug)]
pub struct RegisterArgs {
    #[arg(short, long)]
    pub(crate) email: String,
    #[arg(short, long)]
    pub(crate) username: String,
    #[arg(short, long)]
    pub(crate) password: String,
}

#[derive(Parser, Debug)]
pub struct LoginArgs {
    #[arg(short, long)]
    pub(crate) email: String,
    #[arg(short, long)]
    pub(crate) password: String,
}

#[derive(Parser, Debug)]
pub struct UpdateMeArgs {
    #[arg(short, long)]
    pub(crate) username: Option<String>,
    #[arg(short, long)]
    pub(crate) email: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ChangePasswordArgs {
    #[arg(short, long)]
    pub(crate) current_password: String,
    #[arg(short, long)]
    pub(crate) new_password: String,
}

#[derive(Parser, Debug)]
pub struct DeleteAccountArgs {
    /// Current password, to confirm the deletion
    #[arg(short, long)]
    pub(crate) password: String,
}

#[derive(Parser, Debug)]
pub struct ListSkillsArgs {
    /// Search query
    #[arg(short, long)]
    pub(crate) query: Option<String>,
    #[arg(short, long)]
    pub(crate) skip: Option<u32>,
    /// Limit the number of items returned
    #[arg(short, long)]
    pub(crate) limit: Option<u32>,
}

#[derive(Parser, Debug)]
pub struct CreateSkillArgs {
    #[arg(short, long)]
    pub(crate) name: String,
    #[arg(short, long)]
    pub(crate) description: Option<String>,
}

#[derive(Parser, Debug)]
pub struct SkillArgs {
    /// Skill's id
    #[arg(short, long)]
    pub(crate) id: String,
}

#[derive(Parser, Debug)]
pub struct UpdateSkillArgs {
    /// Skill's id
    #[arg(short, long)]
    pub(crate) id: String,
    #[arg(short, long)]
    pub(crate) name: Option<String>,
    #[arg(short, long)]
    pub(crate) description: Option<String>,
}

#[derive(Parser, Debug)]
pub struct UploadSkillFileArgs {
    /// Skill's id
    #[arg(short, long)]
    pub(crate) skill_id: String,
    /// File to upload
    #[arg(short, long)]
    pub(crate) file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct CreateTokenArgs {
    #[arg(short, long)]
    pub(crate) name: String,
    /// Expiration, in RFC 3339 (e.g. 2030-01-01T00:00:00Z)
    #[arg(short, long)]
    pub(crate) expires_at: Option<DateTime<Utc>>,
}

#[derive(Parser, Debug)]
pub struct TokenArgs {
    /// Token's id
    #[arg(short, long)]
    pub(crate) id: String,
}
