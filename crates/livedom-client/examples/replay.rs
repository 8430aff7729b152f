//! Example: replay a server session against an in-memory page
//!
//! Run with `RUST_LOG=livedom_vdom=trace` to watch each patch.

use livedom_client::{Client, ClientConfig, HostEvent, Outbox, ServerMessage, SnapshotSource};
use livedom_tree::HtmlSerializer;
use smol::channel::unbounded;
use tracing_subscriber::EnvFilter;

const PAGES: [&str; 3] = [
    r#"<main><h1>Todo</h1><input identifier="todo"><ul><li>milk</li></ul></main>"#,
    r#"<main><h1>Todo</h1><input identifier="todo"><ul><li>milk</li><li>eggs</li></ul></main>"#,
    r#"<main><h1>Todo (1)</h1><input identifier="todo"><ul><li>eggs</li></ul></main>"#,
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    smol::block_on(async {
        let (to_client, inbound) = unbounded();
        let (outbound, upstream) = unbounded();
        let outbox = Outbox::new(outbound);
        let mut client = Client::new(ClientConfig::default());

        outbox.send(client.on_connect()).await?;
        to_client
            .send(ServerMessage::StoreSession { session_id: "demo".into() })
            .await?;
        for markup in PAGES {
            let snapshot = livedom_html::parse(markup)?;
            to_client.send(ServerMessage::VdomUpdate(snapshot.to_json())).await?;
        }
        to_client
            .send(ServerMessage::ClearInputField { identifier: "todo".into() })
            .await?;
        drop(to_client);

        let stats = SnapshotSource::new(inbound).run(&mut client).await?;
        println!(
            "Applied {} messages ({} snapshots coalesced)",
            stats.applied, stats.coalesced
        );
        println!("{}", HtmlSerializer::new().serialize_inner(client.tree(), client.tree().root()));

        if let Some(input) = client.element_by_identifier("todo") {
            outbox
                .forward(client.capture(&HostEvent::new("input").on(input).with_value("bread")))
                .await?;
        }
        drop(outbox);

        while let Ok(message) = upstream.recv().await {
            println!("-> {}", message.to_json()?);
        }
        Ok::<_, anyhow::Error>(())
    })
}
