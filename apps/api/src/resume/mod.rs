// Résumé intake: document text extraction and contact details.

pub mod contact;
pub mod extract;
pub mod handlers;
pub mod parser;
pub mod prompts;
