//! HTTP transport for the leaderboard, off the main thread.
//!
//! Requests run on the IO task pool and report back over a channel drained
//! by a regular system, so the render loop never blocks on the network.

use super::*;
use bevy::tasks::IoTaskPool;
use crossbeam_channel::{Receiver, Sender, unbounded};

pub(super) fn plugin(app: &mut App) {
    let (tx, rx) = unbounded();
    app.init_resource::<Leaderboard>()
        .insert_resource(ClientChannel { tx, rx })
        .add_observer(on_fetch)
        .add_observer(on_submit)
        .add_systems(OnEnter(GamePhase::GameOver), reset_status)
        .add_systems(OnEnter(GamePhase::Victory), reset_status)
        .add_systems(Update, drain_results.in_set(AppSystems::Update));
}

fn reset_status(mut board: ResMut<Leaderboard>) {
    board.status = SubmitStatus::Idle;
}

#[derive(Debug)]
enum ClientResult {
    Fetched(Vec<Entry>),
    FetchFailed,
    Submitted { rank: Option<u32> },
    SubmitFailed(String),
}

#[derive(Resource)]
struct ClientChannel {
    tx: Sender<ClientResult>,
    rx: Receiver<ClientResult>,
}

fn fetch_entries(limit: u32) -> Result<Vec<Entry>, String> {
    let response = ureq::get(API_URL)
        .query("game", GAME_SLUG)
        .query("limit", &limit.to_string())
        .call()
        .map_err(|e| e.to_string())?;
    let parsed: FetchResponse = response.into_json().map_err(|e| e.to_string())?;
    if parsed.success {
        Ok(parsed.entries)
    } else {
        Ok(Vec::new())
    }
}

fn submit_payload(payload: &SubmitPayload) -> Result<SubmitResponse, String> {
    ureq::post(API_URL)
        .send_json(payload)
        .map_err(|e| e.to_string())?
        .into_json()
        .map_err(|e| e.to_string())
}

fn on_fetch(on: On<FetchLeaderboard>, channel: Res<ClientChannel>, mut board: ResMut<Leaderboard>) {
    board.fetching = true;
    let limit = on.limit;
    let tx = channel.tx.clone();
    IoTaskPool::get()
        .spawn(async move {
            let result = match fetch_entries(limit) {
                Ok(entries) => ClientResult::Fetched(entries),
                Err(e) => {
                    warn!("leaderboard fetch failed: {e}");
                    ClientResult::FetchFailed
                }
            };
            let _ = tx.send(result);
        })
        .detach();
}

fn on_submit(
    _: On<SubmitScore>,
    settings: Res<Settings>,
    session: Res<GameSession>,
    phase: Res<State<GamePhase>>,
    channel: Res<ClientChannel>,
    mut board: ResMut<Leaderboard>,
) {
    if board.status == SubmitStatus::Pending {
        return;
    }

    // Local validation: no network call for a bad name.
    let name = match validate_name(&settings.player_name) {
        Ok(name) => name.to_string(),
        Err(e) => {
            board.status = SubmitStatus::Rejected(e.to_string());
            return;
        }
    };

    let level = match phase.get() {
        GamePhase::Victory => levels::LEVEL_COUNT as u32,
        _ => session.current_level as u32,
    };
    let payload = SubmitPayload::for_run(
        &name,
        level,
        session.throws_taken,
        settings.wallet_address.clone(),
    );

    board.status = SubmitStatus::Pending;
    let tx = channel.tx.clone();
    IoTaskPool::get()
        .spawn(async move {
            let result = match submit_payload(&payload) {
                Ok(response) if response.success => ClientResult::Submitted {
                    rank: response.rank,
                },
                Ok(response) => ClientResult::SubmitFailed(
                    response.error.unwrap_or_else(|| "unknown error".into()),
                ),
                Err(e) => {
                    warn!("leaderboard submit failed: {e}");
                    ClientResult::SubmitFailed("Network error. Please try again.".into())
                }
            };
            let _ = tx.send(result);
        })
        .detach();
}

fn drain_results(
    channel: Res<ClientChannel>,
    mut board: ResMut<Leaderboard>,
    mut commands: Commands,
) {
    for result in channel.rx.try_iter() {
        match result {
            ClientResult::Fetched(entries) => {
                board.fetching = false;
                board.entries = entries;
            }
            ClientResult::FetchFailed => {
                board.fetching = false;
                board.entries.clear();
            }
            ClientResult::Submitted { rank } => {
                board.status = SubmitStatus::Accepted { rank };
                // Refresh the list so the new entry shows up.
                commands.trigger(FetchLeaderboard { limit: 20 });
            }
            ClientResult::SubmitFailed(error) => {
                board.status = SubmitStatus::Rejected(error);
            }
        }
    }
}
