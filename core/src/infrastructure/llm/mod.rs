pub mod openai_client;

pub use openai_client::{NO_RESPONSE_FALLBACK, OpenAiLlmClient};
