/// Unique record identifier (stable across runs).
/// Example: `posts/2024/building-a-cache`
pub type RecordId = String;
/// Free-form tag attached to a record.
/// Examples: `rust`, `distributed-systems`, `数据库`
pub type Tag = String;
/// Identifier for a category label.
/// Examples: `systems`, `notes`, `随笔`
pub type CategoryId = String;
/// Normalized word unit produced by title tokenization.
/// Examples: `building`, `cache`, `缓`, `コンテナ`
pub type Token = String;
