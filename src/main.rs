// Interactive shell for the periscope session engine.
//
// Maps the browser's on-screen controls onto line commands: the URL bar is
// `go <url>` (or just pasting a URL), the ◀ ▶ buttons are `back`/`forward`,
// the ★ button is `mark`, the theme toggle is `theme`, and the clickable
// bookmark bar is `marks` + `open <n>`.

use std::io::{self, BufRead, Write};

use periscope_browser_lib::{BrowserSession, ProxyFetcher, Settings, Theme, ViewState};

const CONTENT_PREVIEW_CHARS: usize = 600;

fn main() {
    env_logger::init();

    let settings = Settings::default();
    let fetcher = ProxyFetcher::new(settings.clone());
    let mut session = BrowserSession::new(&settings, Box::new(fetcher));

    println!("periscope — proxy mini-browser (type `help` for commands)");
    render(&session);

    let stdin = io::stdin();
    loop {
        print!("periscope> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("stdin error: {}", e);
                break;
            }
        }

        match dispatch(&mut session, line.trim()) {
            Action::Quit => break,
            Action::Redraw => render(&session),
            Action::Quiet => {}
        }
    }
}

enum Action {
    Redraw,
    Quiet,
    Quit,
}

fn dispatch(session: &mut BrowserSession, input: &str) -> Action {
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (input, ""),
    };

    match command {
        "" => Action::Quiet,
        "quit" | "exit" => Action::Quit,
        "help" => {
            print_help();
            Action::Quiet
        }
        "go" => {
            session.navigate(rest);
            Action::Redraw
        }
        "back" => {
            session.go_back();
            Action::Redraw
        }
        "forward" => {
            session.go_forward();
            Action::Redraw
        }
        "mark" => {
            session.bookmark_current();
            Action::Redraw
        }
        "marks" => {
            print_bookmarks(session);
            Action::Quiet
        }
        "open" => {
            match rest.parse::<usize>().ok().and_then(|n| {
                session.bookmarks().get(n.checked_sub(1)?).map(str::to_string)
            }) {
                Some(url) => {
                    session.navigate(&url);
                    Action::Redraw
                }
                None => {
                    println!("no such bookmark: {}", rest);
                    Action::Quiet
                }
            }
        }
        "theme" => {
            let theme = session.toggle_theme();
            println!("theme: {} ({})", theme_label(theme), theme.style_class());
            Action::Redraw
        }
        "log" => {
            print_log(session);
            Action::Quiet
        }
        "state" => {
            match serde_json::to_string_pretty(&session.snapshot()) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("failed to serialize state: {}", e),
            }
            Action::Quiet
        }
        // Bare URL pasted at the prompt acts like the Go button.
        _ if input.starts_with("http") => {
            session.navigate(input);
            Action::Redraw
        }
        other => {
            println!("unknown command: {} (try `help`)", other);
            Action::Quiet
        }
    }
}

fn print_help() {
    println!("  go <url>    fetch a page through the proxy (or paste a URL)");
    println!("  back        step back in history");
    println!("  forward     step forward in history");
    println!("  mark        bookmark the current page (★)");
    println!("  marks       list bookmarks");
    println!("  open <n>    open bookmark number n");
    println!("  theme       toggle dark/light");
    println!("  log         show the status log");
    println!("  state       dump the session state as JSON");
    println!("  quit        exit");
}

fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "dark",
        Theme::Light => "light",
    }
}

fn render(session: &BrowserSession) {
    let back = if session.can_go_back() { "◀" } else { " " };
    let forward = if session.can_go_forward() { "▶" } else { " " };
    let url = session.current_url().unwrap_or("");
    println!();
    println!("[{}{}] {} | {}", back, forward, url, theme_label(session.theme()));

    print_log(session);

    match session.view() {
        ViewState::Loading => println!("  🔄 Loading site..."),
        ViewState::Loaded { html } => {
            let preview: String = html.chars().take(CONTENT_PREVIEW_CHARS).collect();
            println!("─── content {}", "─".repeat(40));
            println!("{}", preview);
            if html.chars().count() > CONTENT_PREVIEW_CHARS {
                println!("… ({} chars total)", html.chars().count());
            }
            println!("{}", "─".repeat(52));
        }
        // A failed load ends with no content: same placeholder as empty.
        ViewState::Empty | ViewState::Failed => println!("  🌐 Enter a URL to browse"),
    }

    if !session.bookmarks().is_empty() {
        print_bookmarks(session);
    }
}

fn print_log(session: &BrowserSession) {
    // Errors in red; info lines green in the dark theme only.
    let dark = session.theme() == Theme::Dark;
    for entry in session.status_log().entries() {
        let color = match entry.kind {
            periscope_browser_lib::LogKind::Error => "\x1b[31m",
            periscope_browser_lib::LogKind::Info if dark => "\x1b[32m",
            _ => "",
        };
        println!("  {}{}\x1b[0m", color, entry.message);
    }
}

fn print_bookmarks(session: &BrowserSession) {
    use periscope_browser_lib::BookmarkSet;

    if session.bookmarks().is_empty() {
        println!("  (no bookmarks)");
        return;
    }
    println!("🔖 Bookmarks");
    for (i, url) in session.bookmarks().iter().enumerate() {
        println!("  {}. {} ({})", i + 1, BookmarkSet::label(url), url);
    }
}
