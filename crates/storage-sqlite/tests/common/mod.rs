//! Shared harness for storage integration tests: a temp database, a fixed
//! clock, and fully wired services.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use coffer_core::accounts::{AccountService, AccountServiceTrait, Caller, NewAccount};
use coffer_core::clock::FixedClock;
use coffer_core::investments::InvestmentService;
use coffer_core::money::Money;
use coffer_core::plans::PlanService;
use coffer_core::transactions::TransactionService;
use coffer_core::wallets::{WalletRepositoryTrait, WalletService};

use coffer_storage_sqlite::accounts::AccountRepository;
use coffer_storage_sqlite::investments::InvestmentRepository;
use coffer_storage_sqlite::plans::PlanRepository;
use coffer_storage_sqlite::transactions::TransactionRepository;
use coffer_storage_sqlite::wallets::WalletRepository;
use coffer_storage_sqlite::{create_pool, init, run_migrations, spawn_writer};

/// Id of the 7-day / 20% plan seeded by the migrations.
pub const STARTER_PLAN_ID: &str = "plan-starter-7d";

pub struct TestEngine {
    _data_dir: TempDir,
    pub clock: Arc<FixedClock>,
    pub wallets: Arc<WalletRepository>,
    pub wallet_service: WalletService,
    pub accounts: AccountService,
    pub transactions: TransactionService,
    pub plans: PlanService,
    pub investments: InvestmentService,
}

pub fn test_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

pub async fn setup_engine() -> TestEngine {
    let data_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = init(data_dir.path().to_str().unwrap()).expect("Failed to initialize database");
    let pool = create_pool(&db_path).expect("Failed to create database pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer((*pool).clone());

    let clock = Arc::new(FixedClock::new(test_epoch()));

    let account_repo = Arc::new(AccountRepository::new(pool.clone(), writer.clone()));
    let wallet_repo = Arc::new(WalletRepository::new(pool.clone(), writer.clone()));
    let transaction_repo = Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let plan_repo = Arc::new(PlanRepository::new(pool.clone(), writer.clone()));
    let investment_repo = Arc::new(InvestmentRepository::new(pool, writer));

    TestEngine {
        _data_dir: data_dir,
        clock: clock.clone(),
        wallets: wallet_repo.clone(),
        wallet_service: WalletService::new(wallet_repo.clone()),
        accounts: AccountService::new(account_repo),
        transactions: TransactionService::new(transaction_repo, wallet_repo),
        plans: PlanService::new(plan_repo.clone()),
        investments: InvestmentService::new(investment_repo, plan_repo, clock),
    }
}

/// Creates a regular user and credits the given starting balance through
/// the ledger.
pub async fn create_funded_user(engine: &TestEngine, name: &str, minor: i64) -> Caller {
    let account = engine
        .accounts
        .create_account(NewAccount {
            id: None,
            name: name.to_string(),
            is_admin: false,
        })
        .await
        .expect("Failed to create user account");
    if minor > 0 {
        engine
            .wallets
            .credit(&account.id, Money::from_minor(minor))
            .await
            .expect("Failed to seed wallet");
    }
    Caller::user(account.id)
}

pub async fn create_admin(engine: &TestEngine, name: &str) -> Caller {
    let account = engine
        .accounts
        .create_account(NewAccount {
            id: None,
            name: name.to_string(),
            is_admin: true,
        })
        .await
        .expect("Failed to create admin account");
    Caller::admin(account.id)
}

pub fn balance_of(engine: &TestEngine, caller: &Caller) -> i64 {
    use coffer_core::wallets::WalletServiceTrait;
    engine
        .wallet_service
        .get_wallet(caller)
        .expect("Failed to read wallet")
        .balance
        .minor()
}
