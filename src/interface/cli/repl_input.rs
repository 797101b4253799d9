//! REPL 입력 처리기.
//! `/`로 시작하면 명령 추천을, `/search <title>` 입력 중에는 디바운스된 제목 추천을 표시한다.

use std::env;
use std::io::{self, IsTerminal, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::application::autocomplete::{Autocomplete, SuggestionUpdate};
use crate::domain::policy;
use crate::domain::view::{Flash, FlashKind, ViewId};

struct Suggestion {
    slash: &'static str,
    description: &'static str,
    usage: &'static str,
}

const SUGGESTIONS: [Suggestion; 16] = [
    Suggestion {
        slash: "/search",
        description: "search titles (live suggestions)",
        usage: "/search <title> [--genre <id>] [--year <yyyy>]",
    },
    Suggestion {
        slash: "/show",
        description: "open anime detail page",
        usage: "/show <mal_id>",
    },
    Suggestion {
        slash: "/favorite",
        description: "toggle favorite on the detail page",
        usage: "/favorite",
    },
    Suggestion {
        slash: "/favorites",
        description: "list your favorites",
        usage: "/favorites",
    },
    Suggestion {
        slash: "/trending",
        description: "trending carousel",
        usage: "/trending [next|prev]",
    },
    Suggestion {
        slash: "/view",
        description: "switch the main view",
        usage: "/view <search|profile-edit|password|favorites>",
    },
    Suggestion {
        slash: "/menu",
        description: "toggle the sidebar menu",
        usage: "/menu",
    },
    Suggestion {
        slash: "/profile",
        description: "show your profile",
        usage: "/profile",
    },
    Suggestion {
        slash: "/profile-edit",
        description: "edit username and avatar",
        usage: "/profile-edit [--username <name>] [--avatar <path>]",
    },
    Suggestion {
        slash: "/password",
        description: "change your password",
        usage: "/password <current> <new> <confirm>",
    },
    Suggestion {
        slash: "/login",
        description: "sign in",
        usage: "/login <email> <password>",
    },
    Suggestion {
        slash: "/register",
        description: "create an account",
        usage: "/register <email> <username> <password>",
    },
    Suggestion {
        slash: "/logout",
        description: "sign out",
        usage: "/logout",
    },
    Suggestion {
        slash: "/home",
        description: "back to the main page",
        usage: "/home",
    },
    Suggestion {
        slash: "/config",
        description: "show effective merged config",
        usage: "/config",
    },
    Suggestion {
        slash: "/exit",
        description: "exit interactive shell",
        usage: "/exit",
    },
];

/// 인자 없이 Enter를 누르면 공백을 붙여 인자 입력 상태로 확장하는 명령.
const EXPANDABLE: &[&str] = &["/search", "/show", "/view", "/password", "/login", "/register"];

const DEFAULT_INPUT_PREFILL: &str = "";
// 입력 영역 기본 높이: 상단 구분선 + 입력줄 + 하단 구분선
const PANEL_BASE_HEIGHT: usize = 3;
const MAX_TITLE_ROWS: usize = 10;
const POLL_TICK: Duration = Duration::from_millis(50);

/// 입력 패널 상단에 표시할 현재 화면 정보와 일시 메시지.
pub struct PanelStatus {
    pub context: String,
    pub flash: Option<Flash>,
    pub ttl: Duration,
}

impl PanelStatus {
    fn visible_flash(&self, now: Instant) -> Option<&Flash> {
        self.flash.as_ref().filter(|f| !f.is_expired_at(now, self.ttl))
    }
}

/// `/search` 입력에 붙는 자동완성 상태.
pub struct LiveSuggest {
    autocomplete: Autocomplete,
    updates: UnboundedReceiver<SuggestionUpdate>,
    last_query: Option<String>,
}

impl LiveSuggest {
    pub fn new((autocomplete, updates): (Autocomplete, UnboundedReceiver<SuggestionUpdate>)) -> Self {
        Self {
            autocomplete,
            updates,
            last_query: None,
        }
    }

    /// 입력 변경 알림. 검색 모드를 벗어나면 대기 중인 요청을 취소한다.
    fn input_changed(&mut self, input: &str) {
        match search_text(input) {
            Some(text) => {
                if self.last_query.as_deref() != Some(text) {
                    self.last_query = Some(text.to_string());
                    self.autocomplete.input_changed(text);
                }
            }
            None => self.dismiss(),
        }
    }

    fn dismiss(&mut self) {
        self.autocomplete.cancel();
        self.last_query = None;
    }

    /// 도착한 갱신 중 마지막 것만 돌려준다.
    fn poll(&mut self) -> Option<SuggestionUpdate> {
        let mut latest = None;
        loop {
            match self.updates.try_recv() {
                Ok(update) => latest = Some(update),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        latest
    }
}

/// REPL 한 줄 입력을 읽는다.
/// - TTY + 지원 터미널: 실시간 추천 + 방향키 선택 + 제목 자동완성
/// - non-TTY/미지원 터미널: 일반 라인 입력
pub fn read_repl_input(
    prefill: Option<&str>,
    status: &PanelStatus,
    live: &mut LiveSuggest,
) -> Result<Option<String>> {
    let initial = prefill.unwrap_or(DEFAULT_INPUT_PREFILL);

    if !supports_interactive_input() {
        return read_line_fallback(initial);
    }

    let result = match read_line_interactive(initial, status, live) {
        Ok(v) => Ok(v),
        Err(_) => read_line_fallback(initial),
    };
    live.dismiss();
    result
}

fn supports_interactive_input() -> bool {
    if !io::stdout().is_terminal() {
        return false;
    }

    // dumb 터미널에서는 제어 시퀀스 기반 UI를 비활성화한다.
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn read_line_fallback(initial: &str) -> Result<Option<String>> {
    print!("anishelf> {initial}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }

    let typed = trim_newline(line);
    if initial.is_empty() || typed.starts_with('/') || typed.starts_with(initial) {
        return Ok(Some(typed));
    }

    Ok(Some(format!("{initial}{typed}")))
}

/// 제목 추천 목록과 선택 위치.
#[derive(Default)]
struct TitleList {
    titles: Vec<String>,
    selected: usize,
}

impl TitleList {
    fn apply(&mut self, update: SuggestionUpdate) {
        match update {
            SuggestionUpdate::Show(titles) => {
                self.titles = titles;
                self.selected = 0;
            }
            SuggestionUpdate::Hide => self.hide(),
        }
    }

    fn hide(&mut self) {
        self.titles.clear();
        self.selected = 0;
    }

    fn is_open(&self) -> bool {
        !self.titles.is_empty()
    }

    fn chosen(&self) -> Option<&str> {
        self.titles.get(self.selected).map(String::as_str)
    }
}

fn read_line_interactive(
    initial: &str,
    status: &PanelStatus,
    live: &mut LiveSuggest,
) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    let _guard = InputGuard::enter(&mut stdout)?;

    let mut input = initial.to_string();
    let mut cursor_chars = input.chars().count();
    let mut selected_idx = default_suggestion_index(&input, &match_suggestions(&input));
    let mut titles = TitleList::default();
    let mut flash_shown = status.visible_flash(Instant::now()).is_some();
    let mut dirty = true;

    loop {
        let suggestions = match_suggestions(&input);
        if suggestions.is_empty() {
            selected_idx = 0;
        } else if selected_idx >= suggestions.len() {
            selected_idx = suggestions.len() - 1;
        }

        if dirty {
            let flash = status.visible_flash(Instant::now());
            render_frame(
                &mut stdout,
                &Frame {
                    input: &input,
                    cursor_chars,
                    suggestions: &suggestions,
                    selected_idx,
                    titles: &titles,
                    context: &status.context,
                    flash,
                },
            )?;
            dirty = false;
        }

        if !event::poll(POLL_TICK)? {
            // 입력이 없는 동안 도착한 추천 결과와 메시지 만료를 반영한다.
            if let Some(update) = live.poll()
                && search_text(&input).is_some()
            {
                titles.apply(update);
                dirty = true;
            }
            let now_shown = status.visible_flash(Instant::now()).is_some();
            if now_shown != flash_shown {
                flash_shown = now_shown;
                dirty = true;
            }
            continue;
        }

        let before = input.clone();
        dirty = true;

        match event::read()? {
            Event::Paste(text) => {
                for ch in text.chars() {
                    insert_char_at(&mut input, cursor_chars, ch);
                    cursor_chars += 1;
                }
            }
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Enter => {
                        // 인자가 필요한 명령은 즉시 실행하지 않고 인자 입력 상태로 확장한다.
                        if let Some(expanded) = expand_input(&input, &suggestions, selected_idx) {
                            input = expanded;
                            cursor_chars = input.chars().count();
                            continue;
                        }
                        let final_input = finalize_input(&input, &suggestions, selected_idx);
                        clear_panel_for_output(&mut stdout)?;
                        return Ok(Some(final_input));
                    }
                    KeyCode::Esc => {
                        // 추천 목록 바깥을 누른 것과 같이 목록만 닫는다.
                        titles.hide();
                        live.dismiss();
                    }
                    KeyCode::Backspace => {
                        if cursor_chars > 0 {
                            remove_char_at(&mut input, cursor_chars - 1);
                            cursor_chars -= 1;
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_chars < input.chars().count() {
                            remove_char_at(&mut input, cursor_chars);
                        }
                    }
                    KeyCode::Left => {
                        cursor_chars = cursor_chars.saturating_sub(1);
                    }
                    KeyCode::Right => {
                        cursor_chars = (cursor_chars + 1).min(input.chars().count());
                    }
                    KeyCode::Home => {
                        cursor_chars = 0;
                    }
                    KeyCode::End => {
                        cursor_chars = input.chars().count();
                    }
                    KeyCode::Up => {
                        if titles.is_open() {
                            titles.selected = titles.selected.saturating_sub(1);
                        } else if !suggestions.is_empty() {
                            selected_idx = selected_idx.saturating_sub(1);
                        }
                    }
                    KeyCode::Down => {
                        if titles.is_open() {
                            titles.selected = (titles.selected + 1).min(titles.titles.len() - 1);
                        } else if !suggestions.is_empty() {
                            selected_idx = (selected_idx + 1).min(suggestions.len() - 1);
                        }
                    }
                    KeyCode::Tab => {
                        if let Some(title) = titles.chosen() {
                            input = fill_search_title(&input, title);
                            cursor_chars = input.chars().count();
                            titles.hide();
                            // 채워 넣은 제목으로는 다시 추천을 요청하지 않는다.
                            live.dismiss();
                            live.last_query = search_text(&input).map(str::to_string);
                            continue;
                        } else if !suggestions.is_empty()
                            && input.starts_with('/')
                            && !input.contains(' ')
                        {
                            input = suggestions[selected_idx].slash.to_string();
                            cursor_chars = input.chars().count();
                        }
                    }
                    KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        clear_panel_for_output(&mut stdout)?;
                        return Ok(None);
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        clear_panel_for_output(&mut stdout)?;
                        return Ok(Some("/exit".to_string()));
                    }
                    KeyCode::Char(ch) => {
                        if !key.modifiers.contains(KeyModifiers::CONTROL)
                            && !key.modifiers.contains(KeyModifiers::ALT)
                        {
                            insert_char_at(&mut input, cursor_chars, ch);
                            cursor_chars += 1;
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }

        if input != before {
            if search_text(&input).is_none() {
                titles.hide();
            }
            live.input_changed(&input);
        }
    }
}

fn match_suggestions(input: &str) -> Vec<&'static Suggestion> {
    if !input.starts_with('/') {
        return Vec::new();
    }

    if input.contains(' ') {
        return Vec::new();
    }

    let q = input.to_ascii_lowercase();
    SUGGESTIONS
        .iter()
        .filter(|s| s.slash.starts_with(&q) || q == "/")
        .collect()
}

// 정확히 일치하는 명령이 있으면 그것을, 없으면 첫 항목을 고른다.
fn default_suggestion_index(input: &str, suggestions: &[&Suggestion]) -> usize {
    suggestions
        .iter()
        .position(|item| item.slash == input)
        .unwrap_or(0)
}

fn finalize_input(input: &str, suggestions: &[&Suggestion], selected_idx: usize) -> String {
    if input.starts_with('/') && !input.contains(' ') && !suggestions.is_empty() {
        return suggestions[selected_idx].slash.to_string();
    }
    input.to_string()
}

/// 인자가 필요한 명령을 단독 입력 시 공백을 추가해 확장한다.
fn expand_input(input: &str, suggestions: &[&Suggestion], selected_idx: usize) -> Option<String> {
    if input.contains(' ') {
        return None;
    }

    if EXPANDABLE.contains(&input) {
        return Some(format!("{input} "));
    }

    if input.starts_with('/')
        && !suggestions.is_empty()
        && suggestions[selected_idx].slash != input
        && EXPANDABLE.contains(&suggestions[selected_idx].slash)
    {
        return Some(format!("{} ", suggestions[selected_idx].slash));
    }

    None
}

/// `/search ` 뒤의 제목 부분. `--genre`/`--year` 옵션이 시작되면 그 앞까지만 본다.
fn search_text(input: &str) -> Option<&str> {
    let rest = input.strip_prefix("/search ")?;
    let end = rest.find(" --").unwrap_or(rest.len());
    let text = &rest[..end];
    if text.starts_with("--") {
        return Some("");
    }
    Some(text)
}

/// 선택한 제목으로 검색어를 바꾸고 뒤따르는 옵션은 유지한다.
fn fill_search_title(input: &str, title: &str) -> String {
    let rest = input.strip_prefix("/search ").unwrap_or_default();
    match rest.find(" --") {
        Some(idx) => format!("/search {title}{}", &rest[idx..]),
        None => format!("/search {title}"),
    }
}

/// 명령별 실시간 힌트를 반환한다.
fn realtime_hint(input: &str) -> Option<(Color, String)> {
    let trimmed = input.trim_start();
    let command = trimmed.split_whitespace().next()?;
    if !trimmed.contains(' ') {
        return None;
    }
    let entry = SUGGESTIONS.iter().find(|s| s.slash == command)?;
    let args: Vec<&str> = trimmed.split_whitespace().skip(1).collect();

    match command {
        "/show" => Some(match args.as_slice() {
            [] => (Color::Yellow, format!("hint: {}", entry.usage)),
            [id] if id.parse::<u64>().is_ok() => {
                (Color::Green, "ready: press Enter to open the detail page".to_string())
            }
            _ => (Color::Red, "error: mal_id must be a number".to_string()),
        }),
        "/view" => Some(match args.as_slice() {
            [] => (Color::Yellow, format!("hint: {}", entry.usage)),
            [name] if ViewId::parse(name).is_some() => {
                (Color::Green, "ready: press Enter to switch".to_string())
            }
            _ => (Color::Red, format!("error: unknown view, {}", entry.usage)),
        }),
        "/password" => Some(match args.len() {
            3 if args[1] != args[2] => (
                Color::Red,
                policy::PASSWORD_MISMATCH.to_string(),
            ),
            3 => (Color::Green, "ready: press Enter to submit".to_string()),
            _ => (Color::Yellow, format!("hint: {}", entry.usage)),
        }),
        "/search" if args.is_empty() => Some((
            Color::Yellow,
            format!("hint: {}", policy::EMPTY_SEARCH),
        )),
        _ => Some((Color::Yellow, format!("usage: {}", entry.usage))),
    }
}

struct Frame<'a> {
    input: &'a str,
    cursor_chars: usize,
    suggestions: &'a [&'static Suggestion],
    selected_idx: usize,
    titles: &'a TitleList,
    context: &'a str,
    flash: Option<&'a Flash>,
}

/// 패널 한 줄. `panel` 줄은 입력 영역 배경색을 깐다.
#[derive(Debug, PartialEq)]
struct Row {
    text: String,
    fg: Color,
    panel: bool,
}

impl Row {
    fn panel(text: String, fg: Color) -> Self {
        Self { text, fg, panel: true }
    }

    fn plain(text: String, fg: Color) -> Self {
        Self { text, fg, panel: false }
    }
}

impl Frame<'_> {
    /// 입력 패널을 위에서 아래 순서의 줄 목록으로 만든다. 두 번째 줄이 프롬프트다.
    fn rows(&self, width: usize) -> Vec<Row> {
        let mut rows = vec![Row::panel(header_line(self.context, width), Color::White)];

        if self.input.is_empty() {
            rows.push(Row::panel(
                render_prompt_line("/ Enter run · ↑↓ select · Tab complete · Esc close", width),
                Color::Grey,
            ));
        } else {
            rows.push(Row::panel(render_prompt_line(self.input, width), Color::White));
        }
        rows.push(Row::panel("─".repeat(width), Color::White));

        if let Some(flash) = self.flash {
            let color = match flash.kind {
                FlashKind::Error => Color::Red,
                FlashKind::Success => Color::Green,
            };
            rows.push(Row::plain(flash.text.clone(), color));
        }

        if let Some((color, line)) = realtime_hint(self.input) {
            rows.push(Row::plain(line, color));
        }

        for (idx, title) in self.titles.titles.iter().take(MAX_TITLE_ROWS).enumerate() {
            let marker = if idx == self.titles.selected { ">" } else { " " };
            rows.push(Row::plain(format!("{marker} {title}"), Color::Cyan));
        }

        for (idx, item) in self.suggestions.iter().enumerate() {
            let marker = if idx == self.selected_idx { ">" } else { " " };
            rows.push(Row::plain(
                format!(
                    "{marker} {:<13} - {} | usage: {}",
                    item.slash, item.description, item.usage
                ),
                Color::White,
            ));
        }

        rows
    }
}

fn render_frame(stdout: &mut io::Stdout, frame: &Frame<'_>) -> Result<()> {
    let (w, h) = terminal::size().unwrap_or((120, 40));
    // 패널 배경의 우측 끊김을 막기 위해 터미널 전체 폭을 사용한다.
    let width = (w as usize).max(20);
    let total_rows = h as usize;

    let rows = frame.rows(width);
    let panel_top = total_rows.saturating_sub(rows.len());

    // 이전 프레임 잔상을 지우기 위해 가능한 최대 영역을 클리어한다.
    let max_panel_height = PANEL_BASE_HEIGHT + 2 + SUGGESTIONS.len().max(MAX_TITLE_ROWS);
    for row in total_rows.saturating_sub(max_panel_height)..total_rows {
        execute!(
            stdout,
            cursor::MoveTo(0, row as u16),
            terminal::Clear(ClearType::CurrentLine)
        )?;
    }

    for (offset, row) in rows.iter().enumerate() {
        paint_row(stdout, (panel_top + offset) as u16, row, width)?;
    }

    let col = prompt_cursor_col(frame.input, frame.cursor_chars, width) as u16;
    execute!(stdout, cursor::MoveTo(col, (panel_top + 1) as u16), cursor::Show)?;
    stdout.flush()?;
    Ok(())
}

fn paint_row(stdout: &mut io::Stdout, at: u16, row: &Row, width: usize) -> Result<()> {
    execute!(stdout, cursor::MoveTo(0, at))?;
    if row.panel {
        execute!(stdout, SetBackgroundColor(Color::DarkGrey))?;
    }
    execute!(
        stdout,
        SetForegroundColor(row.fg),
        terminal::Clear(ClearType::CurrentLine)
    )?;
    write!(
        stdout,
        "{}",
        pad_line_display(&clip_line_display(&row.text, width), width)
    )?;
    execute!(stdout, ResetColor)?;
    Ok(())
}

fn header_line(context: &str, width: usize) -> String {
    let label = format!("── {context} ");
    let used = display_width(&label);
    let fill = "─".repeat(width.saturating_sub(used));
    clip_line_display(&format!("{label}{fill}"), width)
}

fn render_prompt_line(input: &str, width: usize) -> String {
    let prefix = "> ";
    let prefix_width = display_width(prefix);
    let available = width.saturating_sub(prefix_width);
    let shown = tail_with_ellipsis_display(input, available);
    clip_line_display(&format!("{prefix}{shown}"), width)
}

fn prompt_cursor_col(input: &str, cursor_chars: usize, width: usize) -> usize {
    let prefix = "> ";
    let prefix_width = display_width(prefix);
    let input_width = display_width(input);
    let before_cursor: String = input.chars().take(cursor_chars).collect();
    let before_cursor_width = display_width(&before_cursor);
    let available = width.saturating_sub(prefix_width);

    if input_width <= available {
        return (prefix_width + before_cursor_width).min(width.saturating_sub(1));
    }

    // 오버플로우 상태에서는 tail 표시 정책상 커서를 입력 끝쪽으로 정렬한다.
    (prefix_width + display_width(&tail_with_ellipsis_display(input, available)))
        .min(width.saturating_sub(1))
}

fn tail_with_ellipsis_display(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if display_width(text) <= max_width {
        return text.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut tail_rev = String::new();
    let mut used = 0usize;

    for ch in text.chars().rev() {
        let cw = char_display_width(ch);
        if used + cw > target {
            break;
        }
        tail_rev.push(ch);
        used += cw;
    }

    let tail: String = tail_rev.chars().rev().collect();
    format!("...{tail}")
}

fn clip_line_display(line: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if display_width(line) <= max_width {
        return line.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut out = String::new();
    let mut used = 0usize;
    let cap = max_width - 3;

    for ch in line.chars() {
        let cw = char_display_width(ch);
        if used + cw > cap {
            break;
        }
        out.push(ch);
        used += cw;
    }

    out.push_str("...");
    out
}

fn pad_line_display(line: &str, width: usize) -> String {
    let mut out = line.to_string();
    let used = display_width(line);
    if used < width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}

fn clear_panel_for_output(stdout: &mut io::Stdout) -> Result<()> {
    // 명령 실행 결과는 항상 상단에서 시작하도록 화면을 정리한다.
    execute!(
        stdout,
        cursor::MoveTo(0, 0),
        terminal::Clear(ClearType::All),
        ResetColor,
        cursor::Show
    )?;
    stdout.flush()?;
    Ok(())
}

fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

struct InputGuard;

impl InputGuard {
    fn enter(stdout: &mut io::Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout, cursor::Show)?;
        Ok(Self)
    }
}

impl Drop for InputGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, ResetColor);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

fn insert_char_at(input: &mut String, char_idx: usize, ch: char) {
    let byte_idx = byte_index_at_char(input, char_idx);
    input.insert(byte_idx, ch);
}

fn remove_char_at(input: &mut String, char_idx: usize) {
    let start = byte_index_at_char(input, char_idx);
    let end = byte_index_at_char(input, char_idx + 1);
    if start < end && end <= input.len() {
        input.replace_range(start..end, "");
    }
}

fn byte_index_at_char(input: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    input
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(input.len())
}
