// Resume header: social platform table and the name / position / links container.
// Stateless; nothing is persisted.

pub mod handlers;
pub mod header;
pub mod platforms;
