use std::time::Duration;

use test_utils::context::TestContext;
use url::Url;

use crate::server::{data::blob::BlobStore, service::token::TokenService};

mod document;
mod folder;

fn tokens() -> TokenService {
    TokenService::new(
        "service-test-secret",
        Duration::from_secs(3600),
        Url::parse("http://localhost:3010").unwrap(),
    )
}

fn blob_store(test: &mut TestContext) -> BlobStore {
    BlobStore::new(test.storage_dir().unwrap())
}
