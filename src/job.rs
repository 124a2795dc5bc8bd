// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! A transaction draft served by a background task
//!
//! The job owns one [`TransactionDraft`] and processes commands one at a time,
//! so at most one unit change is in flight per draft and every outcome is
//! applied before the next command is looked at. Handles are cheap to clone and
//! can be shared between UI tasks.

use tokio::sync::{mpsc, oneshot};
use tracing::{error, info};

use crate::{
    spans, BalanceSnapshot, BalanceValidator, DraftJobError, SwapCommand, SwapError,
    TokenRegistry, TransactionDraft, Unit, UnitSwapConfig, UnitSwapCoordinator, UnitSwapError,
};

type Responder<T> = oneshot::Sender<T>;

/// Command buffer of a draft job
const CHANNEL_CAPACITY: usize = 10;

/// Background task owning one transaction draft
pub struct DraftJob {
    draft: TransactionDraft,
    coordinator: UnitSwapCoordinator,
    tokens: TokenRegistry,
    validator: BalanceValidator,
}

impl DraftJob {
    /// Initializes the `DraftJob` and returns a `DraftJobHandle`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn init(config: &UnitSwapConfig, balances: BalanceSnapshot) -> DraftJobHandle {
        let (tx, mut rx) = mpsc::channel(CHANNEL_CAPACITY);

        let mut job = DraftJob {
            draft: TransactionDraft::new(&config.network),
            coordinator: UnitSwapCoordinator::new(config.network.clone()),
            tokens: config.token_registry(),
            validator: BalanceValidator::new(config, balances),
        };

        info!(
            network = %config.network.id,
            unit = %config.network.unit,
            tokens = job.tokens.len(),
            "Starting draft job"
        );

        tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                job.handle(command);
            }
            info!("Draft job stopped");
        });

        DraftJobHandle { tx }
    }

    fn handle(&mut self, command: Command) {
        let span = spans::draft_job_command(command.name());
        let _guard = span.enter();

        match command {
            Command::ChangeUnit(cmd) => {
                let result = self.draft.change_unit(
                    &self.coordinator,
                    cmd.unit,
                    &self.tokens,
                    &self.validator,
                );
                if cmd.responder.send(result).is_err() {
                    error!("Failed to send unit change response");
                }
            }
            Command::SetRecipient(cmd) => {
                self.draft.set_recipient(cmd.raw);
                if cmd.responder.send(()).is_err() {
                    error!("Failed to send recipient response");
                }
            }
            Command::SetAmount(cmd) => {
                self.draft.set_amount(&cmd.raw);
                if cmd.responder.send(()).is_err() {
                    error!("Failed to send amount response");
                }
            }
            Command::UpdateBalances(cmd) => {
                self.validator.set_snapshot(cmd.balances);
                if cmd.responder.send(()).is_err() {
                    error!("Failed to send balance update response");
                }
            }
            Command::GetDraft(cmd) => {
                if cmd.responder.send(self.draft.clone()).is_err() {
                    error!("Failed to send draft response");
                }
            }
        }
    }
}

/// Handle for sending commands to a running [`DraftJob`]
#[derive(Clone)]
pub struct DraftJobHandle {
    tx: mpsc::Sender<Command>,
}

impl DraftJobHandle {
    async fn request<T>(
        &self,
        name: &'static str,
        command: impl FnOnce(Responder<T>) -> Command,
    ) -> Result<T, DraftJobError> {
        let (responder, response) = oneshot::channel();
        self.tx
            .send(command(responder))
            .await
            .map_err(|_| DraftJobError::Closed)?;
        response
            .await
            .map_err(|_| DraftJobError::NoResponse { command: name })
    }

    /// Switch the draft to `unit`
    ///
    /// Returns the command the draft was rewritten with, `None` when nothing
    /// changed.
    pub async fn change_unit(
        &self,
        unit: impl Into<Unit>,
    ) -> Result<Option<SwapCommand>, UnitSwapError> {
        let unit = unit.into();
        let result: Result<Option<SwapCommand>, SwapError> = self
            .request("change_unit", |responder| {
                Command::ChangeUnit(ChangeUnitCommand { unit, responder })
            })
            .await?;
        Ok(result?)
    }

    /// Set the recipient the user typed
    pub async fn set_recipient(&self, raw: impl Into<String>) -> Result<(), DraftJobError> {
        let raw = raw.into();
        self.request("set_recipient", |responder| {
            Command::SetRecipient(SetRecipientCommand { raw, responder })
        })
        .await
    }

    /// Set the amount the user typed
    pub async fn set_amount(&self, raw: impl Into<String>) -> Result<(), DraftJobError> {
        let raw = raw.into();
        self.request("set_amount", |responder| {
            Command::SetAmount(SetAmountCommand { raw, responder })
        })
        .await
    }

    /// Replace the balances amounts are validated against
    pub async fn update_balances(&self, balances: BalanceSnapshot) -> Result<(), DraftJobError> {
        self.request("update_balances", |responder| {
            Command::UpdateBalances(UpdateBalancesCommand {
                balances,
                responder,
            })
        })
        .await
    }

    /// Copy of the draft as of now
    pub async fn draft(&self) -> Result<TransactionDraft, DraftJobError> {
        self.request("get_draft", |responder| {
            Command::GetDraft(GetDraftCommand { responder })
        })
        .await
    }
}

enum Command {
    ChangeUnit(ChangeUnitCommand),
    SetRecipient(SetRecipientCommand),
    SetAmount(SetAmountCommand),
    UpdateBalances(UpdateBalancesCommand),
    GetDraft(GetDraftCommand),
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::ChangeUnit(_) => "change_unit",
            Command::SetRecipient(_) => "set_recipient",
            Command::SetAmount(_) => "set_amount",
            Command::UpdateBalances(_) => "update_balances",
            Command::GetDraft(_) => "get_draft",
        }
    }
}

struct ChangeUnitCommand {
    unit: Unit,
    responder: Responder<Result<Option<SwapCommand>, SwapError>>,
}

struct SetRecipientCommand {
    raw: String,
    responder: Responder<()>,
}

struct SetAmountCommand {
    raw: String,
    responder: Responder<()>,
}

struct UpdateBalancesCommand {
    balances: BalanceSnapshot,
    responder: Responder<()>,
}

struct GetDraftCommand {
    responder: Responder<TransactionDraft>,
}
