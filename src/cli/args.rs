// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::parsers::parse_input_file;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "classify_lines",
    version = crate::VERSION,
    about = "テキスト行を整数・浮動小数点数・文字列に分類し、カテゴリ別ファイルと統計を出力する"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 出力ディレクトリ（存在しない場合は作成）
    #[arg(
        short = 'o',
        long,
        default_value = ".",
        allow_hyphen_values = true,
        value_hint = ValueHint::DirPath,
        help_heading = "出力"
    )]
    pub output_dir: PathBuf,

    /// 出力ファイル名の接頭辞（例: sample- → sample-integers.txt）
    #[arg(short, long, default_value = "", allow_hyphen_values = true, help_heading = "出力")]
    pub prefix: String,

    /// 既存ファイルを上書きせず追記する
    #[arg(short, long, help_heading = "出力")]
    pub append: bool,

    /// 行を受け取らなかったカテゴリの既存ファイルを削除せず残す
    #[arg(long, help_heading = "出力")]
    pub keep_existing: bool,

    /// 件数のみの統計を表示（既定）
    #[arg(short, long, conflicts_with = "full", help_heading = "統計")]
    pub short: bool,

    /// 最小・最大・合計・平均などを含む統計を表示
    #[arg(short, long, help_heading = "統計")]
    pub full: bool,

    /// 並列ワーカー数 (1..=512, 既定: CPU 数)
    #[arg(short, long, help_heading = "実行")]
    pub jobs: Option<usize>,

    /// 入力ファイル（`-` で始まる名前は受け付けない）
    #[arg(required = true, value_name = "FILE", value_parser = parse_input_file, value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}
