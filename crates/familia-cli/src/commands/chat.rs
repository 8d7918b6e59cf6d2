use super::context::AppContext;
use anyhow::Result;
use familia_infrastructure::FamiliaPaths;
use familia_application::{ChatConversation, SendOutcome, spawn_chat_poller};
use familia_core::chat::Message;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;

fn print_message(message: &Message, me: Option<&str>) {
    let who = if Some(message.sender_id.as_str()) == me {
        "me"
    } else {
        "them"
    };
    println!("[{}] {}", who, message.display_text(true));
}

async fn print_new(chat: &ChatConversation, seen: &Mutex<HashSet<String>>, me: Option<&str>) {
    let mut seen = seen.lock().await;
    for message in chat.messages().await {
        if seen.insert(message.id.clone()) {
            print_message(&message, me);
        }
    }
}

/// Follows a conversation. Each stdin line is sent; EOF stops polling.
pub async fn tail(paths: &FamiliaPaths, relationship_id: &str) -> Result<()> {
    let ctx = AppContext::open(paths).await?;
    ctx.require_sign_in().await?;
    let me = ctx.session.user_id().await;

    let chat = Arc::new(ChatConversation::new(
        relationship_id,
        ctx.client.clone(),
        ctx.client.clone(),
        ctx.toasts.clone(),
        ctx.config.chat_history_limit,
    ));
    chat.load().await?;

    let seen = Arc::new(Mutex::new(HashSet::new()));
    print_new(&chat, &seen, me.as_deref()).await;

    let poller = spawn_chat_poller(chat.clone(), ctx.config.chat_poll_interval());
    let printer = {
        let chat = chat.clone();
        let seen = seen.clone();
        let me = me.clone();
        let interval = ctx.config.chat_poll_interval();
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                print_new(&chat, &seen, me.as_deref()).await;
            }
        })
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match chat.send(&line).await? {
            SendOutcome::Sent(_) => print_new(&chat, &seen, me.as_deref()).await,
            SendOutcome::Failed { draft, .. } => eprintln!("Not sent: {}", draft),
        }
    }

    printer.abort();
    poller.join().await;
    Ok(())
}
