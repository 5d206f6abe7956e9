use serde::Deserialize;
use ts_rs::TS;

// 搜索查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/search.ts")]
pub struct SearchParams {
    pub q: String,
}
