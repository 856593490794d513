use crate::posts::Post;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::post_detail::{PostDetailState, POST_NOT_FOUND_MESSAGE};
use crate::ui::posts::PostsState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const POSTS_POPUP_WIDTH: u16 = 64;
/// Rows under the list for the selected post's body, including its rule.
const PREVIEW_HEIGHT: u16 = 4;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let snapshot = app.counter();
    frame.render_widget(Header::new().widget(app.slice_name(), snapshot.value), header);
    frame.render_widget(Clear, body);
    frame.render_widget(counter_panel(&snapshot.label, app.last_error()), body);
    frame.render_widget(Footer::new().widget(footer, app.focus()), footer);

    if app.post_detail_open() {
        draw_post_detail(frame, body, app.post_detail());
    } else if app.posts_open() {
        draw_posts_popup(frame, body, app.posts());
    }
}

fn counter_panel(label: &str, error: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[+] Increment   [-] Decrement   [r] Reset",
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    if let Some(error) = error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn popup_block(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(title.to_string(), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER))
}

/// Small popup holding a single status line.
fn draw_status_popup(frame: &mut Frame<'_>, body: Rect, title: &str, line: Line<'static>) {
    let area = centered_rect_by_size(body, POSTS_POPUP_WIDTH, 5);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .block(popup_block(title)),
        area,
    );
}

fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(STATUS_ERROR),
    ))
}

fn draw_posts_popup(frame: &mut Frame<'_>, body: Rect, posts: &PostsState) {
    match posts {
        PostsState::Idle | PostsState::Loading => {
            draw_status_popup(frame, body, "Posts", Line::from("Loading..."))
        }
        PostsState::Failed { message } => {
            draw_status_popup(frame, body, "Posts", error_line(message))
        }
        PostsState::Loaded { posts, .. } if posts.is_empty() => {
            draw_status_popup(frame, body, "Posts", Line::from("No posts."))
        }
        PostsState::Loaded { posts, selected } => {
            draw_post_list(frame, body, posts, *selected)
        }
    }
}

fn draw_post_list(frame: &mut Frame<'_>, body: Rect, posts: &[Post], selected: usize) {
    let area = centered_rect_by_size(body, POSTS_POPUP_WIDTH, body.height);
    frame.render_widget(Clear, area);
    let block = popup_block("Posts");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(PREVIEW_HEIGHT)])
        .split(inner);

    let items: Vec<ListItem> = posts
        .iter()
        .map(|post| ListItem::new(format!("{:>3}. {}", post.id, post.title)))
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).fg(ACCENT));
    // The list scrolls itself so the selected row stays in view
    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, rows[0], &mut state);

    if let Some(post) = posts.get(selected) {
        let preview = Paragraph::new(post.body.clone())
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            );
        frame.render_widget(preview, rows[1]);
    }
}

fn draw_post_detail(frame: &mut Frame<'_>, body: Rect, detail: &PostDetailState) {
    let post = match detail {
        PostDetailState::Closed => return,
        PostDetailState::Loading { .. } => {
            return draw_status_popup(frame, body, "Post", Line::from("Loading..."))
        }
        PostDetailState::NotFound { .. } => {
            return draw_status_popup(frame, body, "Post", Line::from(POST_NOT_FOUND_MESSAGE))
        }
        PostDetailState::Failed { message } => {
            return draw_status_popup(frame, body, "Post", error_line(message))
        }
        PostDetailState::Loaded { post } => post,
    };

    let area = centered_rect_by_size(body, POSTS_POPUP_WIDTH, body.height);
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            post.body.clone(),
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(popup_block(&format!("Post {}", post.id))),
        area,
    );
}
