mod document;
mod document_access;
mod notification;
