//! 内容区滚动状态
//!
//! 表单和结果区块绘制在一个可纵向滚动的视口里。`reveal` 只设置目标位置，
//! 实际偏移在每次 tick 时移动一行，形成平滑滚动。

/// 让 `[top, bottom)` 进入视口所需的最小偏移（就近对齐）
///
/// 已完全可见时保持不动；区块比视口高时对齐顶部
pub fn nearest_offset(current: u16, top: u16, bottom: u16, viewport: u16) -> u16 {
    let view_bottom = current.saturating_add(viewport);
    if top >= current && bottom <= view_bottom {
        current
    } else if top < current || bottom.saturating_sub(top) > viewport {
        top
    } else {
        bottom.saturating_sub(viewport)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrollState {
    offset: u16,
    target: u16,
    max_offset: u16,
    viewport: u16,
}

impl ScrollState {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_scrolling(&self) -> bool {
        self.offset != self.target
    }

    /// 根据内容高度和视口高度更新可滚动范围
    pub fn set_bounds(&mut self, content_height: u16, viewport: u16) {
        self.viewport = viewport;
        self.max_offset = content_height.saturating_sub(viewport);
        self.offset = self.offset.min(self.max_offset);
        self.target = self.target.min(self.max_offset);
    }

    /// 平滑滚动到能看见 `[top, bottom)` 的位置
    pub fn reveal(&mut self, top: u16, bottom: u16) {
        let target = nearest_offset(self.offset, top, bottom, self.viewport);
        self.target = target.min(self.max_offset);
    }

    /// 手动滚动，立即生效
    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset));
        self.offset = next as u16;
        self.target = self.offset;
    }

    pub fn tick(&mut self) {
        if self.offset < self.target {
            self.offset += 1;
        } else if self.offset > self.target {
            self.offset -= 1;
        }
    }
}
