// src/api/http_client.rs
//
// HTTP implementation of the course API
//
// ARCHITECTURE:
// - Thin reqwest client over the admin backend endpoints
// - Maps error bodies to user-facing messages (NO domain knowledge)
// - Auth/session handling belongs to the backend contract, not here

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;

use crate::api::course_api::{Ack, CourseApi, CourseRecord, CourseSummary};
use crate::application::dto::{CoursePayload, LessonAttachPayload};
use crate::error::{AppError, AppResult};

/// Wrapper the backend uses for GET responses
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Error body shape of the admin backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct HttpCourseApi {
    base_url: String,
    http_client: Client,
}

impl HttpCourseApi {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    fn url(&self, caminho: &str) -> String {
        format!("{}{}", self.base_url, caminho)
    }

    /// Turn a non-success response into a user-facing message
    async fn erro_da_resposta(response: Response) -> AppError {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(ErrorBody {
                message: Some(mensagem),
            }) => AppError::Api { mensagem },
            _ => AppError::Api {
                mensagem: format!("Something went wrong! (status {})", status),
            },
        }
    }

    async fn parse<T>(response: Response) -> AppResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        if !response.status().is_success() {
            return Err(Self::erro_da_resposta(response).await);
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CourseApi for HttpCourseApi {
    async fn submit_course(&self, payload: CoursePayload) -> AppResult<CourseRecord> {
        let response = self
            .http_client
            .post(self.url("/admin/addCourse"))
            .json(&payload)
            .send()
            .await?;

        Self::parse::<CourseRecord>(response).await
    }

    async fn list_courses(&self) -> AppResult<Vec<CourseSummary>> {
        let response = self
            .http_client
            .get(self.url("/admin/getCourse"))
            .send()
            .await?;

        let envelope = Self::parse::<Envelope<Vec<CourseSummary>>>(response).await?;
        Ok(envelope.data)
    }

    async fn get_course_by_id(&self, course_id: &str) -> AppResult<CourseRecord> {
        let response = self
            .http_client
            .get(self.url(&format!("/admin/getCourseById/{}", course_id)))
            .send()
            .await?;

        let envelope = Self::parse::<Envelope<CourseRecord>>(response).await?;
        Ok(envelope.data)
    }

    async fn attach_lesson(&self, payload: LessonAttachPayload) -> AppResult<Ack> {
        let response = self
            .http_client
            .post(self.url("/admin/addLesson"))
            .json(&payload)
            .send()
            .await?;

        Self::parse::<Ack>(response).await
    }

    async fn delete_lesson(&self, lesson_id: &str) -> AppResult<Ack> {
        let response = self
            .http_client
            .delete(self.url(&format!("/admin/deleteLesson/{}", lesson_id)))
            .send()
            .await?;

        Self::parse::<Ack>(response).await
    }

    async fn delete_course(&self, course_id: &str) -> AppResult<Ack> {
        let response = self
            .http_client
            .delete(self.url(&format!("/admin/deleteCourse/{}", course_id)))
            .send()
            .await?;

        Self::parse::<Ack>(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpCourseApi::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url, "http://localhost:3000");
        assert_eq!(
            client.url("/admin/addCourse"),
            "http://localhost:3000/admin/addCourse"
        );
    }

    // Note: Real API tests would be in an integration suite against a
    // running backend or a local HTTP stub.
}
