use crate::models::domain::{Question, Quiz, RoomCode};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Chunk size that splits `three_chunk_text` into exactly three chunks.
    pub const CHUNK_SIZE_FOR_THREE: usize = 100;

    /// Builds `count` valid questions. Output is stable per prefix and index,
    /// so `sample_questions(p, 3)` is a prefix of `sample_questions(p, 5)`.
    pub fn sample_questions(prefix: &str, count: usize) -> Vec<Question> {
        (1..=count)
            .map(|i| {
                Question::new(
                    format!("{} question {}?", prefix, i),
                    [
                        format!("{}-a{}", prefix, i),
                        format!("{}-b{}", prefix, i),
                        format!("{}-c{}", prefix, i),
                        format!("{}-d{}", prefix, i),
                    ],
                    format!("{}-a{}", prefix, i),
                )
            })
            .collect()
    }

    /// Three 60-character words separated by spaces.
    pub fn three_chunk_text() -> String {
        format!("{} {} {}", "a".repeat(60), "b".repeat(60), "c".repeat(60))
    }

    pub fn quiz_with_code(code: &str, questions: Vec<Question>) -> Quiz {
        let room_code = RoomCode::parse(code).expect("fixture room code must be valid");
        let levels = questions.len().div_ceil(3).max(1) as u32;
        Quiz::new(room_code, questions, levels, 3)
    }

    /// Serializes questions the way a model reply would carry them.
    pub fn model_reply(questions: &[Question]) -> String {
        serde_json::to_string(questions).expect("questions serialize")
    }

    pub const MULTIPART_BOUNDARY: &str = "----quizroomboundary";

    /// Builds a `multipart/form-data` body with text fields and an optional
    /// `document` file part.
    pub fn multipart_body(fields: &[(&str, &str)], document: Option<(&str, &[u8])>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((file_name, contents)) = document {
            body.extend_from_slice(
                format!(
                    "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"document\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(contents);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
        body
    }

    pub fn multipart_content_type() -> String {
        format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}")
    }

    /// A one-page PDF showing `text` in a standard font.
    pub fn pdf_with_text(text: &str) -> Vec<u8> {
        use lopdf::{
            content::{Content, Operation},
            dictionary, Document, Object, Stream,
        };

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content encodes"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("pdf saves");
        bytes
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::{question_validator::check_question, text_chunker::chunk_text};

    #[test]
    fn test_sample_questions_are_valid() {
        for (i, question) in sample_questions("fx", 5).iter().enumerate() {
            assert!(check_question(i + 1, question).is_ok());
            assert_eq!(question.correct_answer, format!("fx-a{}", i + 1));
        }
    }

    #[test]
    fn test_three_chunk_text_splits_in_three() {
        let chunks = chunk_text(&three_chunk_text(), CHUNK_SIZE_FOR_THREE);
        assert_eq!(chunks.len(), 3);
    }

    #[test]
    fn test_multipart_body_frames_every_part() {
        let body = multipart_body(&[("numLevels", "2")], Some(("notes.txt", &b"hello"[..])));
        let text = String::from_utf8(body).expect("ascii body");

        assert!(text.contains("name=\"numLevels\"\r\n\r\n2\r\n"));
        assert!(text.contains("filename=\"notes.txt\""));
        assert!(text.ends_with(&format!("--{MULTIPART_BOUNDARY}--\r\n")));
    }
}
