//! 后台事件
//!
//! 网络请求和定时器在独立任务中完成，结果通过通道送回 UI 循环。

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::errors::Result;
use crate::service::ShortenResult;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// 提交请求已结束（成功、服务端错误或网络错误）
    SubmitSettled(Result<ShortenResult>),
    /// 提示消息停留时间到，开始退出动画
    AlertExpired { generation: u64 },
    /// 退出动画结束，移除提示
    AlertRemoved { generation: u64 },
    /// 复制按钮确认状态结束
    CopyAckExpired { generation: u64 },
}

pub type EventSender = UnboundedSender<AppEvent>;
pub type EventReceiver = UnboundedReceiver<AppEvent>;

pub fn channel() -> (EventSender, EventReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}
