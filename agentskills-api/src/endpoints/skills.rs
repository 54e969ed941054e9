use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use crate::types::{CreateSkillInput, ListSkillsParams, Page, Skill, TokenPair, UpdateSkillInput, UploadedFile};
use agentskills_common::store::Store;
use agentskills_rest::http::Method;
use agentskills_rest::{Form, RestClient, RestRequest};

const SKILLS_PATH: &str = "/api/v1/skills";

impl<S, T> ApiClient<S, T>
where
    S: Store<(), TokenPair> + Send + Sync,
    S::Error: Send + Sync + 'static,
    T: RestClient + Send + Sync,
{
    /// List skills, optionally filtered by a search query.
    pub async fn list_skills(&self, params: ListSkillsParams) -> Result<Page<Skill>> {
        self.request(
            &RestRequest::<_, ()>::new(Method::GET, SKILLS_PATH).parameters(params),
            RequestOptions::default(),
        )
        .await
    }
    pub async fn create_skill(&self, input: CreateSkillInput) -> Result<Skill> {
        self.request(
            &RestRequest::<(), _>::new(Method::POST, SKILLS_PATH).json(input),
            RequestOptions::default(),
        )
        .await
    }
    pub async fn get_skill(&self, skill_id: impl AsRef<str>) -> Result<Skill> {
        self.request(
            &RestRequest::<(), ()>::new(Method::GET, format!("{SKILLS_PATH}/{}", skill_id.as_ref())),
            RequestOptions::default(),
        )
        .await
    }
    pub async fn update_skill(&self, skill_id: impl AsRef<str>, input: UpdateSkillInput) -> Result<Skill> {
        self.request(
            &RestRequest::<(), _>::new(Method::PUT, format!("{SKILLS_PATH}/{}", skill_id.as_ref()))
                .json(input),
            RequestOptions::default(),
        )
        .await
    }
    pub async fn delete_skill(&self, skill_id: impl AsRef<str>) -> Result<serde_json::Value> {
        self.request(
            &RestRequest::<(), ()>::new(Method::DELETE, format!("{SKILLS_PATH}/{}", skill_id.as_ref())),
            RequestOptions::default(),
        )
        .await
    }
    /// Names of the files stored under a skill.
    pub async fn list_skill_files(&self, skill_id: impl AsRef<str>) -> Result<Vec<String>> {
        self.request(
            &RestRequest::<(), ()>::new(
                Method::GET,
                format!("{SKILLS_PATH}/{}/files", skill_id.as_ref()),
            ),
            RequestOptions::default(),
        )
        .await
    }
    /// Upload a file into a skill as `multipart/form-data`.
    pub async fn upload_skill_file(
        &self,
        skill_id: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Result<UploadedFile> {
        let form =
            Form::new().text("skill_id", skill_id).file("file", file_name, "application/octet-stream", content);
        self.request(
            &RestRequest::<(), ()>::new(Method::POST, format!("{SKILLS_PATH}/upload")).multipart(form),
            RequestOptions::default(),
        )
        .await
    }
}
