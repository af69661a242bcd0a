// Cover letter generation gateway.
// Validates two required fields, builds one prompt, makes one provider call.
// All provider calls go through llm_client — no direct HTTP here.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
