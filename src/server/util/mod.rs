pub mod password;
pub mod storage_key;
