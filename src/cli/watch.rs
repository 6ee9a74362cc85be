//! Interactive watch loop for `users list --watch`.
//!
//! Typed lines feed the debounced search filter, a blank line forces a
//! refetch with the current filter, and `q` (or Ctrl-C, or closing stdin)
//! quits. Fetches run concurrently; the screen applies completions
//! latest-wins, so a slow earlier page can never overwrite a newer one.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::api::types::{User, UserListQuery};
use crate::api::ApiClient;
use crate::cli::command::UserFilterArgs;
use crate::cli::context::{self, CliContext};
use crate::cli::{output, users};
use crate::error::{ConfigError, Result};
use crate::view::{Page, Screen, SearchDebouncer};

/// Execute `users list --watch`.
pub async fn execute_users_watch(ctx: &CliContext, filter: &UserFilterArgs) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "watch",
            reason: "watch mode is interactive; drop --json or use a one-shot list".to_string(),
        }
        .into());
    }

    let screen: Arc<Screen<Page<User>>> = Arc::new(Screen::new());
    let mut debouncer = SearchDebouncer::new(Duration::from_millis(
        ctx.config.console.search_debounce_ms,
    ));
    let mut query = users::build_query(ctx, filter);

    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<()>();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    output::hint("type to search, blank line to refresh, q to quit");
    launch_fetch(&ctx.client, &screen, &done_tx, query.clone());

    loop {
        let debounce_armed = debouncer.is_pending();
        let deadline = debouncer.deadline();

        tokio::select! {
            line = input.next_line() => {
                match line? {
                    None => break,
                    Some(line) => {
                        let line = line.trim().to_string();
                        if line == "q" {
                            break;
                        }
                        if line.is_empty() {
                            // Manual refresh; any half-typed search is discarded.
                            debouncer.take();
                            launch_fetch(&ctx.client, &screen, &done_tx, query.clone());
                        } else {
                            debouncer.update(line);
                        }
                    }
                }
            }
            _ = tokio::time::sleep_until(deadline), if debounce_armed => {
                if let Some(term) = debouncer.take() {
                    query.search = Some(term);
                    query.page = Some(1);
                    launch_fetch(&ctx.client, &screen, &done_tx, query.clone());
                }
            }
            _ = done_rx.recv() => {
                render(&screen, query.search.as_deref());
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}

/// Start one fetch under a fresh ticket. The task signals the loop when
/// its result has been applied (or dropped as stale).
fn launch_fetch(
    client: &ApiClient,
    screen: &Arc<Screen<Page<User>>>,
    done: &mpsc::UnboundedSender<()>,
    query: UserListQuery,
) {
    let client = client.clone();
    let screen = Arc::clone(screen);
    let done = done.clone();
    tokio::spawn(async move {
        screen
            .run(|| async {
                let envelope = client.list_users(&query).await?;
                let payload = envelope.data;
                Ok(Page::from_metadata(payload.users, payload.metadata))
            })
            .await;
        let _ = done.send(());
    });
}

fn render(screen: &Screen<Page<User>>, search: Option<&str>) {
    if let Some(err) = screen.error() {
        context::report(&err);
    }
    if let Some(page) = screen.data() {
        match search {
            Some(term) if !term.is_empty() => {
                output::section(&format!("Users matching '{term}'"));
            }
            _ => output::section("Users"),
        }
        users::render_page(&page);
    }
    if screen.is_loading() {
        output::note("fetching...");
    }
}
