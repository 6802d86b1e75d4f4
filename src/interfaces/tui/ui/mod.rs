//! 界面绘制
//!
//! 表单和结果区块先绘制到离屏缓冲区，再按滚动偏移把可见行复制到视口。
//! 标题、提示栏、底栏和弹窗直接绘制在 Frame 上。

mod alert;
mod common;
mod exiting;
mod form;
mod help;
mod result;
pub mod widgets;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
};

use super::app::{App, Focus, Screen};
use super::constants::layout;

pub use form::form_height;
pub use result::RESULT_HEIGHT;

/// 内容区各区块在离屏缓冲区中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLayout {
    pub form: Rect,
    pub result: Option<Rect>,
    pub height: u16,
}

impl ContentLayout {
    pub fn compute(app: &App, width: u16) -> Self {
        let form = Rect::new(0, 0, width, form_height(&app.form));
        let result = app.result.is_visible().then(|| {
            Rect::new(
                0,
                form.bottom() + layout::SECTION_GAP,
                width,
                RESULT_HEIGHT,
            )
        });
        let height = result.map_or(form.bottom(), |r| r.bottom());
        Self {
            form,
            result,
            height,
        }
    }
}

pub fn draw(frame: &mut Frame, app: &mut App, base_url: &str) {
    let area = frame.area();
    let [title_area, content_area, alert_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(area);

    common::draw_title_bar(frame, base_url, title_area);
    draw_content(frame, app, content_area);
    alert::draw_alert(frame, &app.alerts, alert_area);
    common::draw_footer(frame, app, footer_area);

    match app.screen {
        Screen::Main => {}
        Screen::Help => help::draw_help_screen(frame, area),
        Screen::Exiting => exiting::draw_exiting_screen(frame, app.form.is_submitting(), area),
    }
}

fn draw_content(frame: &mut Frame, app: &mut App, viewport: Rect) {
    let content = ContentLayout::compute(app, viewport.width);
    app.scroll.set_bounds(content.height, viewport.height);
    if app.result.take_scroll_request()
        && let Some(section) = content.result
    {
        app.scroll.reveal(section.top(), section.bottom());
    }

    let mut buf = Buffer::empty(Rect::new(0, 0, viewport.width, content.height));
    let cursor = form::render_form(&app.form, content.form, &mut buf);
    if let Some(section) = content.result {
        result::render_result(
            &app.result,
            app.clipboard.button(),
            app.form.focus() == Focus::Copy,
            section,
            &mut buf,
        );
    }

    let offset = app.scroll.offset();
    blit(&buf, frame.buffer_mut(), viewport, offset);

    if app.screen == Screen::Main
        && let Some(pos) = cursor
        && let Some(pos) = to_viewport(pos, viewport, offset)
    {
        frame.set_cursor_position(pos);
    }
}

/// 把离屏缓冲区从第 `offset` 行开始复制到视口
fn blit(src: &Buffer, dst: &mut Buffer, viewport: Rect, offset: u16) {
    let width = viewport.width.min(src.area.width);
    for row in 0..viewport.height {
        let src_y = offset + row;
        if src_y >= src.area.height {
            break;
        }
        for col in 0..width {
            dst[(viewport.x + col, viewport.y + row)] = src[(col, src_y)].clone();
        }
    }
}

/// 内容坐标转换为屏幕坐标，不在视口内时返回 None
fn to_viewport(pos: Position, viewport: Rect, offset: u16) -> Option<Position> {
    let row = pos.y.checked_sub(offset)?;
    if row >= viewport.height || pos.x >= viewport.width {
        return None;
    }
    Some(Position::new(viewport.x + pos.x, viewport.y + row))
}
