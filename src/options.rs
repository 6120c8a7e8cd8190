// src/options.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
    Jsonl,
    Yaml,
}

/// 処理モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "kebab-case")]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// バックアップのみ (元ファイルは残す)
    Copy,
    /// バックアップせずに削除
    Delete,
    /// バックアップ後に削除
    #[serde(alias = "copy-then-delete")]
    CopyThenDelete,
}

/// バックアップ形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "snake_case")]
pub enum BackupFormat {
    /// そのままコピー (内容・権限・タイムスタンプを保持)
    Verbatim,
    /// テキストとして読み込み .txt で保存
    Text,
}
