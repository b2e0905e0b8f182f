// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Action invocation requests and the bond contract's action set.

use serde_json::Value;

use crate::command::shell_quote;

/// A named action with positional parameters, ready to be pushed.
///
/// Nothing is validated: the external client is the only judge of whether
/// the action name or parameter shapes are acceptable.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionRequest {
    pub action: String,
    pub params: Vec<Value>,
    /// Acting identity; the configured default applies when `None`.
    pub actor: Option<String>,
}

impl ActionRequest {
    pub fn new<P, V>(action: impl Into<String>, params: P) -> Self
    where
        P: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            action: action.into(),
            params: params.into_iter().map(Into::into).collect(),
            actor: None,
        }
    }

    /// Push on behalf of `actor` instead of the default identity.
    pub fn as_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Parameters as a compact JSON array literal.
    pub fn params_json(&self) -> String {
        Value::Array(self.params.clone()).to_string()
    }

    /// `push action <contract> <action> '<json>' -p <identity>` tokens.
    pub fn to_tokens(&self, contract: &str, default_actor: &str) -> Vec<String> {
        vec![
            "push".to_string(),
            "action".to_string(),
            contract.to_string(),
            self.action.clone(),
            shell_quote(&self.params_json()),
            "-p".to_string(),
            self.actor
                .clone()
                .unwrap_or_else(|| default_actor.to_string()),
        ]
    }
}

/// Actions exposed by the bond contract ABI, with parameters in ABI order.
///
/// Quantities are asset strings such as `"1000 FOO"`; they are passed
/// through untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BondAction {
    Create {
        issuer: String,
        maximum_supply: String,
    },
    Issue {
        to: String,
        quantity: String,
        name: String,
        memo: String,
    },
    Transfer {
        from: String,
        to: String,
        quantity: String,
        memo: String,
    },
    TransferId {
        from: String,
        to: String,
        id: u64,
        memo: String,
    },
    Burn {
        owner: String,
        id: u64,
    },
    SetRamPayer {
        payer: String,
        id: u64,
    },
}

impl BondAction {
    pub fn create(issuer: impl Into<String>, maximum_supply: impl Into<String>) -> Self {
        BondAction::Create {
            issuer: issuer.into(),
            maximum_supply: maximum_supply.into(),
        }
    }

    pub fn issue(
        to: impl Into<String>,
        quantity: impl Into<String>,
        name: impl Into<String>,
        memo: impl Into<String>,
    ) -> Self {
        BondAction::Issue {
            to: to.into(),
            quantity: quantity.into(),
            name: name.into(),
            memo: memo.into(),
        }
    }

    pub fn transfer(
        from: impl Into<String>,
        to: impl Into<String>,
        quantity: impl Into<String>,
        memo: impl Into<String>,
    ) -> Self {
        BondAction::Transfer {
            from: from.into(),
            to: to.into(),
            quantity: quantity.into(),
            memo: memo.into(),
        }
    }

    pub fn transfer_id(
        from: impl Into<String>,
        to: impl Into<String>,
        id: u64,
        memo: impl Into<String>,
    ) -> Self {
        BondAction::TransferId {
            from: from.into(),
            to: to.into(),
            id,
            memo: memo.into(),
        }
    }

    pub fn burn(owner: impl Into<String>, id: u64) -> Self {
        BondAction::Burn {
            owner: owner.into(),
            id,
        }
    }

    pub fn set_ram_payer(payer: impl Into<String>, id: u64) -> Self {
        BondAction::SetRamPayer {
            payer: payer.into(),
            id,
        }
    }

    /// On-chain action name.
    pub fn name(&self) -> &'static str {
        match self {
            BondAction::Create { .. } => "create",
            BondAction::Issue { .. } => "issue",
            BondAction::Transfer { .. } => "transfer",
            BondAction::TransferId { .. } => "transferid",
            BondAction::Burn { .. } => "burn",
            BondAction::SetRamPayer { .. } => "setrampayer",
        }
    }

    /// Positional parameters in ABI order.
    pub fn params(&self) -> Vec<Value> {
        match self {
            BondAction::Create {
                issuer,
                maximum_supply,
            } => vec![issuer.as_str().into(), maximum_supply.as_str().into()],
            BondAction::Issue {
                to,
                quantity,
                name,
                memo,
            } => vec![
                to.as_str().into(),
                quantity.as_str().into(),
                name.as_str().into(),
                memo.as_str().into(),
            ],
            BondAction::Transfer {
                from,
                to,
                quantity,
                memo,
            } => vec![
                from.as_str().into(),
                to.as_str().into(),
                quantity.as_str().into(),
                memo.as_str().into(),
            ],
            BondAction::TransferId { from, to, id, memo } => vec![
                from.as_str().into(),
                to.as_str().into(),
                (*id).into(),
                memo.as_str().into(),
            ],
            BondAction::Burn { owner, id } => vec![owner.as_str().into(), (*id).into()],
            BondAction::SetRamPayer { payer, id } => vec![payer.as_str().into(), (*id).into()],
        }
    }

    /// Build a request pushed on behalf of `actor`.
    pub fn by(self, actor: impl Into<String>) -> ActionRequest {
        ActionRequest::from(self).as_actor(actor)
    }
}

impl From<BondAction> for ActionRequest {
    fn from(action: BondAction) -> Self {
        ActionRequest::new(action.name(), action.params())
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
