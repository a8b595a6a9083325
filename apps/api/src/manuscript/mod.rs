// Manuscript intake: upload -> text extraction -> single-slot store.

pub mod extract;
pub mod handlers;
pub mod store;
