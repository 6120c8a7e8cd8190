// src/args.rs
use crate::options::{BackupFormat, Mode, OutputFormat};
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "invoice_purge",
    version,
    about = "請求書ファイル (JSON) の一覧/バックアップ/削除ツール"
)]
pub struct Args {
    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub backup: BackupOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,
}

#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct InputOptions {
    /// 請求書ディレクトリ [既定: ./invoices]
    #[arg(long, value_hint = ValueHint::DirPath, help_heading = "走査/入力")]
    pub source: Option<PathBuf>,

    /// 対象ファイル名のパターン [既定: *.json]
    #[arg(long, help_heading = "走査/入力")]
    pub pattern: Option<String>,

    /// サブディレクトリも走査
    #[arg(long, help_heading = "走査/入力")]
    pub recursive: bool,

    /// 隠しファイルも対象にする
    #[arg(long, help_heading = "走査/入力")]
    pub hidden: bool,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査/入力")]
    pub follow: bool,
}

#[derive(ClapArgs, Debug)]
pub struct BackupOptions {
    /// バックアップ先 [既定: ./downloaded_invoices, text 形式は ./backup_txt]
    #[arg(long, value_hint = ValueHint::DirPath, help_heading = "バックアップ")]
    pub dest: Option<PathBuf>,

    /// 処理モード [既定: copy-then-delete]
    #[arg(long, value_enum, help_heading = "バックアップ")]
    pub mode: Option<Mode>,

    /// バックアップ形式 [既定: verbatim]
    #[arg(long, value_enum, help_heading = "バックアップ")]
    pub backup_format: Option<BackupFormat>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// 対象ファイルを一覧表示して終了 (ファイルは変更しない)
    #[arg(long, help_heading = "出力")]
    pub list: bool,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// 設定ファイル (YAML/JSON)
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "動作")]
    pub config: Option<PathBuf>,

    /// 1件でも失敗したら終了コード 1 を返す
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// ログレベル (RUST_LOG 未設定時)
    #[arg(long, default_value = "warn", help_heading = "動作")]
    pub log_level: String,
}
