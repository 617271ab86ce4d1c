//! Deckhandのコア機能
//!
//! CIパラメータ文字列のパースと、デプロイパラメータの検証を提供します。
//! 外部プロセスの実行は `deckhand-copilot`、AWSアイデンティティは
//! `deckhand-cloud-aws` が担当します。

pub mod error;
pub mod params;
pub mod validate;

pub use error::{ParamError, Result};
pub use params::{
    DEFAULT_SEPARATOR, ParamMap, parse_parameters, parse_parameters_default, parse_parameters_json,
};
pub use validate::{
    ALL_VALID_MESSAGE, ParamReport, all_parameters_set, check_parameters, check_parameters_value,
};
