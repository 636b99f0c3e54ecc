pub mod openai;
pub mod security;
