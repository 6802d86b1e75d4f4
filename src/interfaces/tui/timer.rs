//! 可取消的定时器
//!
//! 每个组件实例持有自己的 `TimerSlot`。重新 arm 会中止上一个任务，
//! 并且每次 arm 都会生成新的 generation：已经进入通道但被取代的事件
//! 会因为 generation 不匹配而被忽略。

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

use super::event::{AppEvent, EventSender};

pub struct TimerSlot {
    name: &'static str,
    events: EventSender,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl TimerSlot {
    pub fn new(name: &'static str, events: EventSender) -> Self {
        Self {
            name,
            events,
            generation: 0,
            handle: None,
        }
    }

    /// `after` 之后发送 `make_event(generation)`，替换尚未触发的定时器
    pub fn arm<F>(&mut self, after: Duration, make_event: F) -> u64
    where
        F: FnOnce(u64) -> AppEvent + Send + 'static,
    {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let events = self.events.clone();

        trace!("{} timer armed (gen {}) for {:?}", self.name, generation, after);
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            // 接收端已关闭说明 UI 循环已退出
            let _ = events.send(make_event(generation));
        }));

        generation
    }

    /// 中止尚未触发的定时器
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            trace!("{} timer cancelled (gen {})", self.name, self.generation);
        }
    }

    /// 携带 `generation` 的事件是否属于当前定时器
    pub fn is_current(&self, generation: u64) -> bool {
        self.handle.is_some() && generation == self.generation
    }

    /// 事件处理完毕后标记当前定时器已消费
    pub fn clear(&mut self) {
        self.handle = None;
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
