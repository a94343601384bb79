pub mod layout_document;
