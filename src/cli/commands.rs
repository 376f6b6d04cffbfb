//! Shell commands mapped onto engine operations.

use serde::Serialize;

use crate::{
    core::errors::LedgerError,
    ledger::{
        Account, AccountId, Budget, BudgetPeriod, BudgetSettings, BudgetStatus, Owner,
        Transaction, TransactionDraft, TransactionId, TransactionKind,
    },
    utils::build_info,
};

use super::{
    context::{CommandError, CommandResult, ShellContext},
    output,
};

const JSON_FLAG: &str = "--json";

pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub handler: fn(&mut ShellContext, &[&str]) -> CommandResult,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "as",
        usage: "as <owner>",
        handler: cmd_as,
    },
    CommandSpec {
        name: "whoami",
        usage: "whoami",
        handler: cmd_whoami,
    },
    CommandSpec {
        name: "create-account",
        usage: "create-account <name>",
        handler: cmd_create_account,
    },
    CommandSpec {
        name: "record-transaction",
        usage: "record-transaction <account-id> <amount> <category> <description> <INCOME|EXPENSE>",
        handler: cmd_record_transaction,
    },
    CommandSpec {
        name: "set-budget",
        usage: "set-budget <category> <limit> <DAILY|WEEKLY|MONTHLY|YEARLY> <alerts true|false> <threshold>",
        handler: cmd_set_budget,
    },
    CommandSpec {
        name: "get-account",
        usage: "get-account <id> [--json]",
        handler: cmd_get_account,
    },
    CommandSpec {
        name: "get-transaction",
        usage: "get-transaction <id> [--json]",
        handler: cmd_get_transaction,
    },
    CommandSpec {
        name: "get-budget",
        usage: "get-budget <category> [--json]",
        handler: cmd_get_budget,
    },
    CommandSpec {
        name: "get-budget-status",
        usage: "get-budget-status <category> [--json]",
        handler: cmd_get_budget_status,
    },
    CommandSpec {
        name: "version",
        usage: "version",
        handler: cmd_version,
    },
    CommandSpec {
        name: "help",
        usage: "help",
        handler: cmd_help,
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        handler: cmd_exit,
    },
    CommandSpec {
        name: "quit",
        usage: "quit",
        handler: cmd_exit,
    },
];

pub fn find(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

fn cmd_as(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [principal] = expect_args::<1>("as", args)?;
    let owner = Owner::new(principal.trim());
    if owner.is_empty() {
        return Err(CommandError::InvalidArguments("owner must not be empty".into()));
    }
    output::info(format!("Caller set to `{}`", owner));
    ctx.caller = owner;
    Ok(())
}

fn cmd_whoami(ctx: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::line(ctx.caller());
    Ok(())
}

fn cmd_create_account(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name] = expect_args::<1>("create-account", args)?;
    let id = ctx.engine.create_account(&ctx.caller, name)?;
    output::success(format!("Account created: {}", id));
    Ok(())
}

fn cmd_record_transaction(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [account, amount, category, description, kind] =
        expect_args::<5>("record-transaction", args)?;
    let draft = TransactionDraft::new(
        AccountId(parse_uint("account id", account)?),
        parse_uint("amount", amount)?,
        category,
        description,
        kind.parse::<TransactionKind>()?,
    );
    let id = ctx.engine.record_transaction(&ctx.caller, draft)?;
    output::success(format!("Transaction recorded: {}", id));
    Ok(())
}

fn cmd_set_budget(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [category, limit, period, alerts, threshold] = expect_args::<5>("set-budget", args)?;
    let settings = BudgetSettings {
        category: category.to_string(),
        limit: parse_uint("limit", limit)?,
        period: period.parse::<BudgetPeriod>()?,
        alerts_enabled: parse_bool("alerts-enabled", alerts)?,
        alert_threshold: parse_threshold(threshold)?,
    };
    ctx.engine.set_budget(&ctx.caller, settings)?;
    output::success(format!("Budget set for `{}`: true", category.trim()));
    Ok(())
}

fn cmd_get_account(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (args, json) = split_json_flag(args);
    let [id] = expect_args::<1>("get-account", &args)?;
    let account = ctx.engine.get_account(AccountId(parse_uint("account id", id)?));
    print_optional(account, json, describe_account)
}

fn cmd_get_transaction(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (args, json) = split_json_flag(args);
    let [id] = expect_args::<1>("get-transaction", &args)?;
    let txn = ctx
        .engine
        .get_transaction(TransactionId(parse_uint("transaction id", id)?));
    print_optional(txn, json, describe_transaction)
}

fn cmd_get_budget(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (args, json) = split_json_flag(args);
    let [category] = expect_args::<1>("get-budget", &args)?;
    let budget = ctx.engine.get_budget(&ctx.caller, category);
    print_optional(budget, json, describe_budget)
}

fn cmd_get_budget_status(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (args, json) = split_json_flag(args);
    let [category] = expect_args::<1>("get-budget-status", &args)?;
    let status = ctx.engine.get_budget_status(&ctx.caller, category)?;
    if json {
        output::line(to_json(&status)?);
    } else {
        output::line(describe_status(&status));
    }
    Ok(())
}

fn cmd_version(_ctx: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::line(build_info::current().summary());
    Ok(())
}

fn cmd_help(_ctx: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::line("Available commands:");
    for spec in COMMANDS {
        output::line(format!("  {}", spec.usage));
    }
    Ok(())
}

fn cmd_exit(ctx: &mut ShellContext, _args: &[&str]) -> CommandResult {
    ctx.running = false;
    Ok(())
}

fn expect_args<'a, const N: usize>(command: &str, args: &[&'a str]) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| {
        let usage = find(command).map(|spec| spec.usage).unwrap_or(command);
        CommandError::InvalidArguments(format!(
            "`{}` expects {} argument(s), got {}. Usage: {}",
            command,
            N,
            args.len(),
            usage
        ))
    })
}

fn split_json_flag<'a>(args: &[&'a str]) -> (Vec<&'a str>, bool) {
    let json = args.iter().any(|arg| *arg == JSON_FLAG);
    let rest = args.iter().copied().filter(|arg| *arg != JSON_FLAG).collect();
    (rest, json)
}

fn parse_uint(field: &str, raw: &str) -> Result<u64, LedgerError> {
    raw.trim().parse::<u64>().map_err(|_| {
        LedgerError::InvalidInput(format!("{} must be a non-negative integer, got `{}`", field, raw))
    })
}

fn parse_bool(field: &str, raw: &str) -> Result<bool, LedgerError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => Ok(true),
        "false" | "no" | "off" => Ok(false),
        _ => Err(LedgerError::InvalidInput(format!(
            "{} must be true or false, got `{}`",
            field, raw
        ))),
    }
}

fn parse_threshold(raw: &str) -> Result<u8, LedgerError> {
    raw.trim().parse::<u8>().map_err(|_| {
        LedgerError::InvalidInput(format!("alert threshold {} is outside 0..=100", raw))
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, LedgerError> {
    Ok(serde_json::to_string(value)?)
}

fn print_optional<T: Serialize>(value: Option<&T>, json: bool, describe: fn(&T) -> String) -> CommandResult {
    match (value, json) {
        (Some(value), true) => output::line(to_json(value)?),
        (Some(value), false) => output::line(describe(value)),
        (None, true) => output::line("null"),
        (None, false) => output::line("none"),
    }
    Ok(())
}

fn describe_account(account: &Account) -> String {
    format!(
        "account {}: name=\"{}\" owner={}",
        account.id, account.name, account.owner
    )
}

fn describe_transaction(txn: &Transaction) -> String {
    format!(
        "transaction {}: account={} amount={} category=\"{}\" kind={} description=\"{}\" booked-on={} recorded-at={}",
        txn.id,
        txn.account_id,
        txn.amount,
        txn.category,
        txn.kind,
        txn.description,
        txn.booked_on,
        txn.recorded_at.to_rfc3339()
    )
}

fn describe_budget(budget: &Budget) -> String {
    format!(
        "budget \"{}\": limit={} period={} alerts-enabled={} alert-threshold={}",
        budget.category, budget.limit, budget.period, budget.alerts_enabled, budget.alert_threshold
    )
}

fn describe_status(status: &BudgetStatus) -> String {
    format!(
        "status \"{}\": remaining={} used-percentage={} alert-triggered={} spent={} window={}",
        status.category,
        status.remaining,
        status.used_percentage,
        status.alert_triggered,
        status.spent,
        status.window
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LedgerEngine;

    fn context() -> ShellContext {
        ShellContext::new(LedgerEngine::system(), Owner::new("alice"))
    }

    #[test]
    fn every_command_is_discoverable() {
        for name in ["create-account", "record-transaction", "set-budget", "get-budget-status"] {
            assert!(find(name).is_some(), "missing command {name}");
        }
    }

    #[test]
    fn wrong_arity_is_reported_with_usage() {
        let err = expect_args::<2>("set-budget", &["Food"]).unwrap_err();
        match err {
            CommandError::InvalidArguments(message) => assert!(message.contains("Usage")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn json_flag_is_stripped() {
        let (rest, json) = split_json_flag(&["Food", "--json"]);
        assert!(json);
        assert_eq!(rest, vec!["Food"]);
    }

    #[test]
    fn threshold_above_u8_is_invalid_input() {
        assert!(matches!(parse_threshold("300"), Err(LedgerError::InvalidInput(_))));
        assert_eq!(parse_threshold("80").unwrap(), 80);
    }

    #[test]
    fn commands_drive_the_engine_as_the_current_caller() {
        let mut ctx = context();
        cmd_create_account(&mut ctx, &["Test Account"]).unwrap();
        cmd_set_budget(&mut ctx, &["Food", "1000", "MONTHLY", "true", "80"]).unwrap();
        let err = cmd_record_transaction(&mut ctx, &["1", "1100", "Food", "Groceries", "EXPENSE"])
            .unwrap_err();
        match err {
            CommandError::Ledger(inner) => assert_eq!(inner.code().as_u32(), 103),
            other => panic!("unexpected error: {other:?}"),
        }

        cmd_as(&mut ctx, &["bob"]).unwrap();
        assert!(ctx.engine().get_budget(ctx.caller(), "Food").is_none());
    }

    #[test]
    fn unknown_kind_surfaces_as_invalid_input() {
        let mut ctx = context();
        cmd_create_account(&mut ctx, &["Main"]).unwrap();
        let err = cmd_record_transaction(&mut ctx, &["1", "10", "Food", "", "REFUND"]).unwrap_err();
        assert!(matches!(err, CommandError::Ledger(LedgerError::InvalidInput(_))));
    }
}
