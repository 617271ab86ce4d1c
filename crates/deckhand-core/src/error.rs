use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParamError {
    #[error("不正なパラメータセグメント: '{segment}'\nヒント: 各セグメントは `key: value` 形式で、コロンをちょうど1つ含む必要があります")]
    MalformedSegment { segment: String },

    #[error("パラメータがマッピングではありません: {0} が渡されました。このメソッドにはオブジェクトが必要です")]
    NotAMapping(String),

    #[error("JSONシリアライズエラー: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ParamError>;
