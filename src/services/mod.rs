pub mod document_extractor;
pub mod model_service;
pub mod question_aggregator;
pub mod question_validator;
pub mod quiz_generation_service;
pub mod quiz_service;
pub mod response_parser;
pub mod room_registry;
pub mod text_chunker;
