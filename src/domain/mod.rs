// Domain layer: 資料模型與 ports，不依賴 HTTP 或 HTML 實作

pub mod model;
pub mod ports;
