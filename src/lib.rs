//! 客室清掃のお知らせ作成ツール（ホスト側）

pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod print;
pub mod session;
