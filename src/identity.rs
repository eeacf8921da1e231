//! Notification identifier generation
//!
//! The default source derives the id from wall-clock milliseconds truncated
//! to `i32`, which matches the platform's native notification id width. Two
//! dispatches inside the same millisecond therefore collide and the second
//! overwrites the first at the presenter. That behavior is kept on purpose
//! and pinned by tests; hosts that want collision-free ids can plug in
//! `SequentialIdSource` instead.

use chrono::Utc;
use std::sync::atomic::{AtomicI32, Ordering};

/// 通知 id 来源 trait
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> i32;
}

/// 墙钟毫秒 id（默认来源，同毫秒内碰撞）
#[derive(Debug, Default)]
pub struct WallClockIdSource;

impl IdSource for WallClockIdSource {
    fn next_id(&self) -> i32 {
        Utc::now().timestamp_millis() as i32
    }
}

/// 单调递增 id（无碰撞的替代来源）
#[derive(Debug, Default)]
pub struct SequentialIdSource {
    counter: AtomicI32,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从给定起点开始
    pub fn starting_at(start: i32) -> Self {
        Self {
            counter: AtomicI32::new(start),
        }
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> i32 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }
}
