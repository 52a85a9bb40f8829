//! CLI definition and dispatch.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_export;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::http_adapter::{ApiConfig, HttpApiAdapter};
use crate::adapters::session_file_adapter::SessionFileAdapter;
use crate::domain::alerts::{self, JournalAlerts};
use crate::domain::assessment::{DrawdownBand, ProfitTrend, RiskReward, WinRateBand};
use crate::domain::currency::CurrencyPair;
use crate::domain::error::TradeMateError;
use crate::domain::risk::{self, DEFAULT_ACCOUNT_SIZE, DEFAULT_GUIDELINES};
use crate::domain::stats::{EquityInterval, StrategyStats, TradeStats};
use crate::domain::strategy::Strategy;
use crate::domain::trade::{Trade, TradeDirection, TradeStatus, duration_ms, humanize_duration};
use crate::domain::user::{User, UserUpdate};
use crate::domain::validation;
use crate::ports::api_port::ApiPort;
use crate::ports::config_port::ConfigPort;
use crate::ports::session_port::{Session, SessionPort};

#[derive(Parser, Debug)]
#[command(name = "trademate", about = "Trading journal client")]
pub struct Cli {
    /// Config file (default: ~/.trademate.ini when it exists)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        email: String,
    },
    /// Discard the stored session
    Logout,
    /// Account statistics and equity curve
    Dashboard {
        /// Monthly equity curve instead of daily
        #[arg(long)]
        monthly: bool,
    },
    /// Trade journal
    #[command(subcommand)]
    Journal(JournalCommand),
    /// Strategy playbook
    #[command(subcommand)]
    Playbook(PlaybookCommand),
    /// Currency pairs
    #[command(subcommand)]
    Pairs(PairsCommand),
    /// User profile
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Risk calculators
    #[command(subcommand)]
    Risk(RiskCommand),
}

#[derive(Subcommand, Debug)]
pub enum JournalCommand {
    /// List journaled trades with discipline alerts
    List,
    /// Record a trade
    Add(TradeArgs),
    /// Change fields on an existing trade
    Update {
        id: i64,
        #[command(flatten)]
        changes: TradeUpdateArgs,
    },
    /// Delete a trade
    Delete { id: i64 },
    /// Export the journal as CSV
    Export {
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct TradeArgs {
    /// Open timestamp, RFC 3339 or "YYYY-MM-DD HH:MM" (UTC)
    #[arg(long)]
    pub open: String,
    /// Close timestamp, same formats as --open
    #[arg(long)]
    pub close: String,
    #[arg(long)]
    pub pair_id: i64,
    #[arg(long)]
    pub strategy_id: Option<i64>,
    /// win, loss or breakeven
    #[arg(long)]
    pub status: TradeStatus,
    /// buy or sell
    #[arg(long = "type")]
    pub direction: TradeDirection,
    #[arg(long)]
    pub entry: f64,
    #[arg(long)]
    pub exit: f64,
    #[arg(long)]
    pub size: f64,
    #[arg(long)]
    pub stop_loss: f64,
    #[arg(long)]
    pub take_profit: f64,
    #[arg(long, default_value_t = 0.0)]
    pub cost: f64,
    #[arg(long)]
    pub trend: String,
    /// Repeat for multiple categories
    #[arg(long = "category")]
    pub categories: Vec<String>,
    #[arg(long)]
    pub reason: Option<String>,
    #[arg(long)]
    pub comment: Option<String>,
}

/// Same fields as [`TradeArgs`] but everything optional; unset flags keep
/// the stored value.
#[derive(Args, Debug, Default)]
pub struct TradeUpdateArgs {
    #[arg(long)]
    pub open: Option<String>,
    #[arg(long)]
    pub close: Option<String>,
    #[arg(long)]
    pub pair_id: Option<i64>,
    #[arg(long)]
    pub strategy_id: Option<i64>,
    #[arg(long)]
    pub status: Option<TradeStatus>,
    #[arg(long = "type")]
    pub direction: Option<TradeDirection>,
    #[arg(long)]
    pub entry: Option<f64>,
    #[arg(long)]
    pub exit: Option<f64>,
    #[arg(long)]
    pub size: Option<f64>,
    #[arg(long)]
    pub stop_loss: Option<f64>,
    #[arg(long)]
    pub take_profit: Option<f64>,
    #[arg(long)]
    pub cost: Option<f64>,
    #[arg(long)]
    pub trend: Option<String>,
    /// Repeat to replace the category list
    #[arg(long = "category")]
    pub categories: Vec<String>,
    #[arg(long)]
    pub reason: Option<String>,
    #[arg(long)]
    pub comment: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum PlaybookCommand {
    /// List strategies with their win-rate assessment
    List,
    /// Add a strategy
    Add(StrategyArgs),
    /// Change fields on an existing strategy
    Update {
        id: i64,
        #[command(flatten)]
        changes: StrategyUpdateArgs,
    },
    /// Delete a strategy
    Delete { id: i64 },
    /// Per-strategy statistics with qualitative assessment
    Stats { id: i64 },
}

#[derive(Args, Debug)]
pub struct StrategyArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long = "type")]
    pub kind: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub comment: String,
    #[arg(long)]
    pub risk_level: String,
    /// Repeat for multiple markets
    #[arg(long = "market-type")]
    pub market_type: Vec<String>,
    /// Repeat for multiple conditions
    #[arg(long = "market-condition")]
    pub market_condition: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct StrategyUpdateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long = "type")]
    pub kind: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub comment: Option<String>,
    #[arg(long)]
    pub risk_level: Option<String>,
    /// Repeat to replace the market list
    #[arg(long = "market-type")]
    pub market_type: Vec<String>,
    /// Repeat to replace the condition list
    #[arg(long = "market-condition")]
    pub market_condition: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum PairsCommand {
    /// List the account's currency pairs
    List,
    /// Add a currency pair
    Add { from: String, to: String },
    /// Remove a currency pair
    Remove { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show the current profile
    Show,
    /// Update the profile
    Update(ProfileArgs),
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    /// 10-digit phone number
    #[arg(long)]
    pub mobile: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date_of_birth: Option<NaiveDate>,
    #[arg(long)]
    pub address_line1: Option<String>,
    #[arg(long)]
    pub address_line2: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub postal_code: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long)]
    pub initial_capital: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum RiskCommand {
    /// Suggest a position size for a risk percentage and stop-loss distance
    PositionSize {
        /// Account size; defaults to the cached balance
        #[arg(long)]
        account: Option<f64>,
        #[arg(long)]
        risk_pct: f64,
        /// Stop-loss distance in price units
        #[arg(long)]
        stop_loss: f64,
    },
    /// Take-profit distance for a stop-loss distance and reward ratio
    TakeProfit {
        #[arg(long)]
        stop_loss: f64,
        /// Reward side of a 1:R target
        #[arg(long)]
        ratio: f64,
    },
    /// Peak-to-trough drawdown percentage
    Drawdown {
        #[arg(long)]
        peak: f64,
        #[arg(long)]
        trough: f64,
    },
    /// Print the baseline risk-management guidelines
    Guidelines,
}

pub fn run(cli: Cli) -> ExitCode {
    let config = cli.config.as_deref();
    let result = match cli.command {
        Command::Login { email } => run_login(config, &email),
        Command::Register { email } => run_register(config, &email),
        Command::Logout => run_logout(config),
        Command::Dashboard { monthly } => run_dashboard(config, monthly),
        Command::Journal(cmd) => run_journal(config, cmd),
        Command::Playbook(cmd) => run_playbook(config, cmd),
        Command::Pairs(cmd) => run_pairs(config, cmd),
        Command::Profile(cmd) => run_profile(config, cmd),
        Command::Risk(cmd) => run_risk(config, cmd),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Load the given config file, or the default one when it exists.
fn load_config(path: Option<&Path>) -> Result<Option<FileConfigAdapter>, TradeMateError> {
    match path {
        Some(path) => FileConfigAdapter::from_file(path).map(Some),
        None => match default_config_path() {
            Some(path) if path.exists() => FileConfigAdapter::from_file(&path).map(Some),
            _ => Ok(None),
        },
    }
}

fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".trademate.ini"))
}

/// Connection settings from the `[api]` section. `base_url` is required;
/// the rest have defaults.
pub fn build_api_config(config: &dyn ConfigPort) -> Result<ApiConfig, TradeMateError> {
    let base_url =
        config
            .get_string("api", "base_url")
            .ok_or_else(|| TradeMateError::ConfigMissing {
                section: "api".into(),
                key: "base_url".into(),
            })?;
    let timeout = config.get_int("api", "timeout_secs", 30);
    if timeout <= 0 {
        return Err(TradeMateError::ConfigInvalid {
            section: "api".into(),
            key: "timeout_secs".into(),
            reason: "must be a positive number of seconds".into(),
        });
    }
    Ok(ApiConfig {
        base_url,
        prefix: config.get_string("api", "prefix").unwrap_or_default(),
        timeout_secs: timeout as u64,
    })
}

/// Session file location: `[session] file` when configured, otherwise
/// `~/.trademate/session.json`.
pub fn resolve_session_path(config: Option<&dyn ConfigPort>) -> PathBuf {
    if let Some(config) = config {
        if let Some(file) = config.get_string("session", "file") {
            return PathBuf::from(file);
        }
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".trademate").join("session.json"),
        None => PathBuf::from(".trademate-session.json"),
    }
}

struct App {
    api: HttpApiAdapter,
    sessions: SessionFileAdapter,
    session: Option<Session>,
}

fn build_app(config_path: Option<&Path>, require_login: bool) -> Result<App, TradeMateError> {
    let config = load_config(config_path)?;
    let config_port = config.as_ref().map(|c| c as &dyn ConfigPort);

    let api_config = match config_port {
        Some(config) => build_api_config(config)?,
        None => {
            return Err(TradeMateError::ConfigMissing {
                section: "api".into(),
                key: "base_url".into(),
            });
        }
    };

    let sessions = SessionFileAdapter::new(resolve_session_path(config_port));
    let session = sessions.load()?;
    if require_login && session.is_none() {
        return Err(TradeMateError::NotLoggedIn);
    }

    let token = session.as_ref().map(|s| s.token.clone());
    let api = HttpApiAdapter::new(&api_config, token)?;
    Ok(App {
        api,
        sessions,
        session,
    })
}

fn read_password(prompt: &str) -> Result<String, TradeMateError> {
    eprintln!("{prompt}");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Parse a timestamp as RFC 3339, or "YYYY-MM-DD HH:MM" taken as UTC.
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, TradeMateError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M")
        .map(|dt| dt.and_utc())
        .map_err(|_| {
            TradeMateError::validation(
                "date",
                format!("'{value}' is not RFC 3339 or YYYY-MM-DD HH:MM"),
            )
        })
}

fn run_login(config: Option<&Path>, email: &str) -> Result<(), TradeMateError> {
    let app = build_app(config, false)?;
    let password = read_password("Password:")?;
    validation::validate_login(email, &password)?;

    let token = app.api.login(email, &password)?;
    app.sessions.save(&Session {
        token,
        current_balance: None,
    })?;
    println!("Logged in as {email}");
    Ok(())
}

fn run_register(config: Option<&Path>, email: &str) -> Result<(), TradeMateError> {
    let app = build_app(config, false)?;
    let password = read_password("Password:")?;
    let confirm = read_password("Confirm password:")?;
    validation::validate_registration(email, &password, &confirm)?;

    app.api.register(email, &password)?;
    println!("Account created. Run `trademate login --email {email}` to sign in.");
    Ok(())
}

fn run_logout(config: Option<&Path>) -> Result<(), TradeMateError> {
    let config = load_config(config)?;
    let config_port = config.as_ref().map(|c| c as &dyn ConfigPort);
    let sessions = SessionFileAdapter::new(resolve_session_path(config_port));
    sessions.clear()?;
    println!("Logged out.");
    Ok(())
}

fn run_dashboard(config: Option<&Path>, monthly: bool) -> Result<(), TradeMateError> {
    let app = build_app(config, true)?;
    let stats = app.api.trade_stats()?;
    print_dashboard(&stats);

    // Cache the balance for the risk calculators.
    if let (Some(balance), Some(mut session)) = (stats.current_balance, app.session.clone()) {
        session.current_balance = Some(balance);
        app.sessions.save(&session)?;
    }

    let interval = if monthly {
        EquityInterval::Monthly
    } else {
        EquityInterval::Daily
    };
    let curve = app.api.equity_curve(interval)?;
    if !curve.is_empty() {
        println!();
        println!("Equity ({}):", interval.path_segment());
        for point in &curve {
            println!("  {:<12} {:>12.2}", point.date, point.equity);
        }
    }
    Ok(())
}

fn print_dashboard(stats: &TradeStats) {
    println!(
        "Trades:           {} ({} win / {} loss / {} breakeven)",
        stats.total_trades, stats.win_trades, stats.loss_trades, stats.breakeven_trades
    );
    println!("Win rate:         {:.1}%", stats.win_percentage());
    println!("Total profit:     {:.2}", stats.total_profit);
    println!("Daily P/L:        {:.2}", stats.daily_pl);
    println!(
        "Best / worst:     {:.2} / {:.2}",
        stats.highest_win_trade, stats.highest_loss_trade
    );
    println!(
        "Avg holding:      {}",
        humanize_duration(stats.average_holding_period as i64)
    );
    if let Some(ratio) = &stats.risk_to_reward_ratio {
        println!("Risk/reward:      {ratio}");
    }
    if let Some(drawdown) = stats.draw_down_ratio {
        match DrawdownBand::classify(drawdown) {
            Some(band) => println!("Drawdown:         {drawdown:.1}% ({})", band.message()),
            None => println!("Drawdown:         {drawdown:.1}%"),
        }
    }
    if let Some(balance) = stats.current_balance {
        println!("Balance:          {balance:.2}");
    }
    println!(
        "Strategies:       {} ({} currency pairs)",
        stats.total_strategy_count, stats.total_currency_pairs_count
    );
    if let Some(name) = stats.most_profitable_strategy_name() {
        println!("Most profitable:  {name}");
    }

    if !stats.monthly_profits.is_empty() {
        println!();
        println!("Monthly P/L:");
        for month in &stats.monthly_profits {
            println!(
                "  {:<10} +{:.2} / -{:.2}",
                month.month, month.profit, month.loss
            );
        }
    }
    if let Some(alerts) = &stats.total_alerts_this_month {
        println!();
        println!(
            "Alerts this month: {} FOMO, {} over-trading days, {} revenge days",
            alerts.fomo, alerts.over_trade_days, alerts.revenge_trade_days
        );
    }
}

/// Fetch the journal and assess today's discipline alerts.
pub fn fetch_journal(
    api: &dyn ApiPort,
    today: NaiveDate,
) -> Result<(Vec<Trade>, JournalAlerts), TradeMateError> {
    let trades = api.list_trades()?;
    let alerts = alerts::assess(&trades, today);
    Ok((trades, alerts))
}

fn run_journal(config: Option<&Path>, cmd: JournalCommand) -> Result<(), TradeMateError> {
    let app = build_app(config, true)?;
    match cmd {
        JournalCommand::List => {
            let (trades, alerts) = fetch_journal(&app.api, Local::now().date_naive())?;
            print_alerts(&alerts);
            print_journal(&trades);
        }
        JournalCommand::Add(args) => {
            let trade = build_trade(&args)?;
            if trade.is_instant() {
                eprintln!("warning: open and close are the same instant");
            }
            let created = app.api.create_trade(&trade)?;
            match created.id {
                Some(id) => println!("Trade {id} recorded."),
                None => println!("Trade recorded."),
            }
        }
        JournalCommand::Update { id, changes } => {
            let trades = app.api.list_trades()?;
            let mut trade = trades
                .into_iter()
                .find(|t| t.id == Some(id))
                .ok_or_else(|| TradeMateError::validation("id", format!("no trade {id}")))?;
            apply_trade_updates(&mut trade, &changes)?;
            if trade.is_instant() {
                eprintln!("warning: open and close are the same instant");
            }
            app.api.update_trade(id, &trade)?;
            println!("Trade {id} updated.");
        }
        JournalCommand::Delete { id } => {
            app.api.delete_trade(id)?;
            println!("Trade {id} deleted.");
        }
        JournalCommand::Export { output } => {
            let trades = app.api.list_trades()?;
            csv_export::export_trades(&output, &trades)?;
            println!("Exported {} trades to {}", trades.len(), output.display());
        }
    }
    Ok(())
}

fn print_journal(trades: &[Trade]) {
    if trades.is_empty() {
        println!("No trades recorded.");
        return;
    }
    println!(
        "{:>5}  {:<20}  {:<9}  {:<9}  {:<5}  {:>10}",
        "id", "opened", "pair", "status", "type", "profit"
    );
    for trade in trades {
        let pair = trade
            .currency_pair
            .as_ref()
            .map(|p| p.label())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>5}  {:<20}  {:<9}  {:<9}  {:<5}  {:>10.2}",
            trade.id.map(|id| id.to_string()).unwrap_or_default(),
            trade.open_date.format("%Y-%m-%d %H:%M"),
            pair,
            trade.status,
            trade.direction,
            trade.display_profit(),
        );
    }
}

fn print_alerts(alerts: &JournalAlerts) {
    if !alerts.any() {
        return;
    }
    if alerts.over_trading {
        eprintln!(
            "alert: over-trading ({} trades opened today)",
            alerts.trades_today
        );
    }
    if alerts.revenge_trading {
        eprintln!(
            "alert: possible revenge trading ({} losing trades today)",
            alerts.losing_trades_today
        );
    }
    if alerts.fomo {
        eprintln!("alert: possible FOMO (trade taken today without a strategy)");
    }
}

/// Build a validated trade from the `journal add` flags.
pub fn build_trade(args: &TradeArgs) -> Result<Trade, TradeMateError> {
    let open = parse_datetime(&args.open)?;
    let close = parse_datetime(&args.close)?;
    let trade = Trade {
        id: None,
        open_date: open,
        close_date: close,
        duration: duration_ms(open, close),
        currency_pair_id: Some(args.pair_id),
        currency_pair: None,
        strategy_id: args.strategy_id,
        strategy: None,
        status: args.status,
        direction: args.direction,
        entry_price: args.entry,
        exit_price: args.exit,
        categories: Some(args.categories.clone()),
        market_trend: args.trend.clone(),
        stop_loss_price: args.stop_loss,
        take_profit_price: args.take_profit,
        transaction_cost: args.cost,
        reason: args.reason.clone(),
        comment: args.comment.clone(),
        position_size: Some(args.size),
        user_id: None,
        profit: None,
    };
    validation::validate_trade(&trade)?;
    Ok(trade)
}

/// Overlay `journal update` flags onto a stored trade and revalidate.
pub fn apply_trade_updates(
    trade: &mut Trade,
    changes: &TradeUpdateArgs,
) -> Result<(), TradeMateError> {
    if let Some(open) = &changes.open {
        trade.open_date = parse_datetime(open)?;
    }
    if let Some(close) = &changes.close {
        trade.close_date = parse_datetime(close)?;
    }
    trade.duration = duration_ms(trade.open_date, trade.close_date);
    if let Some(pair_id) = changes.pair_id {
        trade.currency_pair_id = Some(pair_id);
        trade.currency_pair = None;
    }
    if let Some(strategy_id) = changes.strategy_id {
        trade.strategy_id = Some(strategy_id);
        trade.strategy = None;
    }
    if let Some(status) = changes.status {
        trade.status = status;
    }
    if let Some(direction) = changes.direction {
        trade.direction = direction;
    }
    if let Some(entry) = changes.entry {
        trade.entry_price = entry;
    }
    if let Some(exit) = changes.exit {
        trade.exit_price = exit;
    }
    if let Some(size) = changes.size {
        trade.position_size = Some(size);
    }
    if let Some(stop_loss) = changes.stop_loss {
        trade.stop_loss_price = stop_loss;
    }
    if let Some(take_profit) = changes.take_profit {
        trade.take_profit_price = take_profit;
    }
    if let Some(cost) = changes.cost {
        trade.transaction_cost = cost;
    }
    if let Some(trend) = &changes.trend {
        trade.market_trend = trend.clone();
    }
    if !changes.categories.is_empty() {
        trade.categories = Some(changes.categories.clone());
    }
    if let Some(reason) = &changes.reason {
        trade.reason = Some(reason.clone());
    }
    if let Some(comment) = &changes.comment {
        trade.comment = Some(comment.clone());
    }
    validation::validate_trade(trade)
}

fn run_playbook(config: Option<&Path>, cmd: PlaybookCommand) -> Result<(), TradeMateError> {
    let app = build_app(config, true)?;
    match cmd {
        PlaybookCommand::List => {
            let strategies = app.api.list_strategies()?;
            print_playbook(&strategies);
        }
        PlaybookCommand::Add(args) => {
            let strategy = build_strategy(&args)?;
            let created = app.api.create_strategy(&strategy)?;
            match created.id {
                Some(id) => println!("Strategy {id} added."),
                None => println!("Strategy added."),
            }
        }
        PlaybookCommand::Update { id, changes } => {
            let strategies = app.api.list_strategies()?;
            let mut strategy = strategies
                .into_iter()
                .find(|s| s.id == Some(id))
                .ok_or_else(|| TradeMateError::validation("id", format!("no strategy {id}")))?;
            apply_strategy_updates(&mut strategy, &changes)?;
            app.api.update_strategy(id, &strategy)?;
            println!("Strategy {id} updated.");
        }
        PlaybookCommand::Delete { id } => {
            app.api.delete_strategy(id)?;
            println!("Strategy {id} deleted.");
        }
        PlaybookCommand::Stats { id } => {
            let user = app.api.current_user()?;
            let user_id = user.id.ok_or_else(|| TradeMateError::Decode {
                reason: "profile has no user id".into(),
            })?;
            let stats = app.api.strategy_stats(user_id, id)?;
            for line in strategy_report(&stats) {
                println!("{line}");
            }
            let trades = app.api.strategy_trades(id)?;
            if !trades.is_empty() {
                println!();
                println!("Trades using this strategy:");
                print_journal(&trades);
            }
        }
    }
    Ok(())
}

fn print_playbook(strategies: &[Strategy]) {
    if strategies.is_empty() {
        println!("No strategies in the playbook.");
        return;
    }
    for strategy in strategies {
        let id = strategy.id.map(|id| id.to_string()).unwrap_or_default();
        println!(
            "{:>5}  {:<24}  {:<20}  {:>5.1}% over {} trades",
            id, strategy.name, strategy.kind, strategy.win_rate, strategy.total_trades
        );
        println!(
            "       {}",
            WinRateBand::classify(strategy.win_rate).message()
        );
        let tags = strategy.tags();
        if !tags.is_empty() {
            println!("       tags: {}", tags.join(", "));
        }
    }
}

/// Assessment lines for `playbook stats`.
pub fn strategy_report(stats: &StrategyStats) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "Win rate:       {:.1}% | {}",
        stats.win_loss_ratio,
        WinRateBand::classify(stats.win_loss_ratio).message()
    ));
    if let Some(ratio) = &stats.risk_to_reward_ratio {
        match RiskReward::parse(ratio) {
            Ok(rr) => lines.push(format!("Risk/reward:    {ratio} | {}", rr.band().message())),
            Err(_) => lines.push(format!("Risk/reward:    {ratio}")),
        }
    }
    if let Some(avg) = stats.average_profit_loss {
        match ProfitTrend::classify(avg) {
            Some(trend) => lines.push(format!("Avg P/L:        {avg:.2} | {}", trend.message())),
            None => lines.push(format!("Avg P/L:        {avg:.2}")),
        }
    }
    if let Some(drawdown) = stats.draw_down_ratio {
        match DrawdownBand::classify(drawdown) {
            Some(band) => lines.push(format!(
                "Max drawdown:   {drawdown:.1}% | {}",
                band.message()
            )),
            None => lines.push(format!("Max drawdown:   {drawdown:.1}%")),
        }
    }
    lines
}

/// Build a validated strategy from the `playbook add` flags.
pub fn build_strategy(args: &StrategyArgs) -> Result<Strategy, TradeMateError> {
    let strategy = Strategy {
        id: None,
        name: args.name.clone(),
        kind: args.kind.clone(),
        comment: Some(args.comment.clone()),
        description: args.description.clone(),
        market_type: Some(args.market_type.clone()),
        market_condition: Some(args.market_condition.clone()),
        risk_level: args.risk_level.clone(),
        win_rate: 0.0,
        total_trades: 0,
        last_modified_date: None,
        user_id: None,
        star_rate: None,
    };
    validation::validate_strategy(&strategy)?;
    Ok(strategy)
}

/// Overlay `playbook update` flags onto a stored strategy and revalidate.
pub fn apply_strategy_updates(
    strategy: &mut Strategy,
    changes: &StrategyUpdateArgs,
) -> Result<(), TradeMateError> {
    if let Some(name) = &changes.name {
        strategy.name = name.clone();
    }
    if let Some(kind) = &changes.kind {
        strategy.kind = kind.clone();
    }
    if let Some(description) = &changes.description {
        strategy.description = description.clone();
    }
    if let Some(comment) = &changes.comment {
        strategy.comment = Some(comment.clone());
    }
    if let Some(risk_level) = &changes.risk_level {
        strategy.risk_level = risk_level.clone();
    }
    if !changes.market_type.is_empty() {
        strategy.market_type = Some(changes.market_type.clone());
    }
    if !changes.market_condition.is_empty() {
        strategy.market_condition = Some(changes.market_condition.clone());
    }
    validation::validate_strategy(strategy)
}

fn run_pairs(config: Option<&Path>, cmd: PairsCommand) -> Result<(), TradeMateError> {
    let app = build_app(config, true)?;
    match cmd {
        PairsCommand::List => {
            let pairs = app.api.list_pairs()?;
            if pairs.is_empty() {
                println!("No currency pairs.");
            }
            for pair in &pairs {
                let id = pair.id.map(|id| id.to_string()).unwrap_or_default();
                println!("{:>5}  {}", id, pair.label());
            }
        }
        PairsCommand::Add { from, to } => {
            validation::validate_pair(&from, &to)?;
            let created = app.api.create_pair(&CurrencyPair::new(&from, &to))?;
            println!("Added {}.", created.label());
        }
        PairsCommand::Remove { id } => {
            app.api.delete_pair(id)?;
            println!("Pair {id} removed.");
        }
    }
    Ok(())
}

fn run_profile(config: Option<&Path>, cmd: ProfileCommand) -> Result<(), TradeMateError> {
    let app = build_app(config, true)?;
    match cmd {
        ProfileCommand::Show => {
            let user = app.api.current_user()?;
            print_profile(&user);
        }
        ProfileCommand::Update(args) => {
            let user = app.api.current_user()?;
            let update = build_user_update(&user, &args)?;
            app.api.update_user(&update)?;
            println!("Profile updated.");
        }
    }
    Ok(())
}

fn print_profile(user: &User) {
    println!("Email:            {}", user.email);
    let name = match (&user.first_name, &user.last_name) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        (Some(first), None) => first.clone(),
        (None, Some(last)) => last.clone(),
        (None, None) => "-".to_string(),
    };
    println!("Name:             {name}");
    println!(
        "Mobile:           {}",
        user.mobile.as_deref().unwrap_or("-")
    );
    if let Some(dob) = user.date_of_birth {
        println!("Date of birth:    {dob}");
    }
    let address: Vec<&str> = [
        user.address_line1.as_deref(),
        user.address_line2.as_deref(),
        user.city.as_deref(),
        user.postal_code.as_deref(),
        user.country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !address.is_empty() {
        println!("Address:          {}", address.join(", "));
    }
    if let Some(capital) = user.initial_capital {
        println!("Initial capital:  {capital:.2}");
    }
}

/// Overlay profile flags onto the stored profile and validate the result.
pub fn build_user_update(user: &User, args: &ProfileArgs) -> Result<UserUpdate, TradeMateError> {
    let mut update = UserUpdate::from_user(user);
    if let Some(first_name) = &args.first_name {
        update.first_name = first_name.clone();
    }
    if let Some(last_name) = &args.last_name {
        update.last_name = last_name.clone();
    }
    if let Some(mobile) = &args.mobile {
        update.mobile = mobile.clone();
    }
    if let Some(dob) = args.date_of_birth {
        update.date_of_birth = Some(dob);
    }
    if let Some(line1) = &args.address_line1 {
        update.address_line1 = line1.clone();
    }
    if let Some(line2) = &args.address_line2 {
        update.address_line2 = Some(line2.clone());
    }
    if let Some(city) = &args.city {
        update.city = city.clone();
    }
    if let Some(postal_code) = &args.postal_code {
        update.postal_code = postal_code.clone();
    }
    if let Some(country) = &args.country {
        update.country = country.clone();
    }
    if let Some(gender) = &args.gender {
        update.gender = Some(gender.clone());
    }
    if let Some(capital) = args.initial_capital {
        update.initial_capital = capital;
    }
    validation::validate_user_update(&update)?;
    Ok(update)
}

fn run_risk(config: Option<&Path>, cmd: RiskCommand) -> Result<(), TradeMateError> {
    match cmd {
        RiskCommand::PositionSize {
            account,
            risk_pct,
            stop_loss,
        } => {
            let account = match account {
                Some(account) => account,
                None => cached_balance(config)?.unwrap_or(DEFAULT_ACCOUNT_SIZE),
            };
            let suggestion = risk::suggest_position(account, risk_pct, stop_loss)?;
            println!("Account size:   {account:.2}");
            println!("Max risk:       {:.2}", suggestion.max_risk);
            println!("Position size:  {:.4} units", suggestion.position_size);
        }
        RiskCommand::TakeProfit { stop_loss, ratio } => {
            let distance = risk::optimal_take_profit(stop_loss, ratio)?;
            println!("Take-profit distance: {distance:.4}");
        }
        RiskCommand::Drawdown { peak, trough } => {
            let pct = risk::drawdown_pct(peak, trough)?;
            match DrawdownBand::classify(pct) {
                Some(band) => println!("Drawdown: {pct:.1}% ({})", band.message()),
                None => println!("Drawdown: {pct:.1}%"),
            }
        }
        RiskCommand::Guidelines => {
            for guideline in DEFAULT_GUIDELINES {
                println!("- {guideline}");
            }
        }
    }
    Ok(())
}

/// Balance cached by the last dashboard run, if any. The risk calculators
/// work offline, so a missing config or session is not an error here.
fn cached_balance(config: Option<&Path>) -> Result<Option<f64>, TradeMateError> {
    let config = load_config(config)?;
    let config_port = config.as_ref().map(|c| c as &dyn ConfigPort);
    let sessions = SessionFileAdapter::new(resolve_session_path(config_port));
    Ok(sessions.load()?.and_then(|s| s.current_balance))
}
