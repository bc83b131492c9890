use async_trait::async_trait;
use store_actor::{StoreActor, StoreError, StoreState};

// --- Test State ---

#[derive(Clone, Debug, PartialEq)]
struct SimplePanel {
    open: bool,
    title: String,
}

#[derive(Debug)]
enum PanelAction {
    Open,
    Close,
    Retitle(String),
}

#[derive(Debug, thiserror::Error)]
#[error("Panel already open")]
struct AlreadyOpen;

#[async_trait]
impl StoreState for SimplePanel {
    type Action = PanelAction;
    type Context = ();
    type Error = AlreadyOpen;

    async fn apply(&mut self, action: PanelAction, _ctx: &()) -> Result<(), AlreadyOpen> {
        match action {
            PanelAction::Open => {
                if self.open {
                    return Err(AlreadyOpen);
                }
                self.open = true;
                Ok(())
            }
            PanelAction::Close => {
                self.open = false;
                Ok(())
            }
            PanelAction::Retitle(title) => {
                self.title = title;
                Ok(())
            }
        }
    }
}

fn closed_panel() -> SimplePanel {
    SimplePanel {
        open: false,
        title: "untitled".to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    // Start store
    let (actor, client) = StoreActor::new(closed_panel(), 10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Snapshot returns the seed state
    let initial = client.snapshot().await.unwrap();
    assert_eq!(initial, closed_panel());

    // 2. Dispatch commits and returns the updated state
    let opened = client.dispatch(PanelAction::Open).await.unwrap();
    assert!(opened.open);

    // 3. Rejected action surfaces the domain error...
    let result = client.dispatch(PanelAction::Open).await;
    assert!(matches!(result, Err(StoreError::Rejected(_))));

    // ...and leaves the committed state untouched
    let after_rejection = client.snapshot().await.unwrap();
    assert_eq!(after_rejection, opened);

    // 4. Further dispatches keep flowing
    let retitled = client
        .dispatch(PanelAction::Retitle("specials".to_string()))
        .await
        .unwrap();
    assert_eq!(retitled.title, "specials");
    assert!(retitled.open);

    // 5. Dropping the last client shuts the store down
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_subscribers_follow_commits_and_skip_rejections() {
    let (actor, client) = StoreActor::new(closed_panel(), 10);
    tokio::spawn(actor.run(()));

    let mut feed = client.subscribe();
    assert!(!feed.borrow().open, "seed state should be visible");

    // A committed dispatch is published before the call resolves
    client.dispatch(PanelAction::Open).await.unwrap();
    assert!(feed.has_changed().unwrap());
    assert!(feed.borrow_and_update().open);

    // A rejected dispatch publishes nothing
    let result = client.dispatch(PanelAction::Open).await;
    assert!(result.is_err());
    assert!(!feed.has_changed().unwrap());

    // The next commit is observed again
    client.dispatch(PanelAction::Close).await.unwrap();
    assert!(feed.has_changed().unwrap());
    assert!(!feed.borrow_and_update().open);
}

#[tokio::test]
async fn test_clients_share_one_committed_state() {
    let (actor, client) = StoreActor::new(closed_panel(), 10);
    tokio::spawn(actor.run(()));

    let second = client.clone();
    client.dispatch(PanelAction::Open).await.unwrap();

    let seen = second.snapshot().await.unwrap();
    assert!(seen.open, "clones must observe commits from other clients");
}
