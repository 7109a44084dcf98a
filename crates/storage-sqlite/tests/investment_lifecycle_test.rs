//! End-to-end tests for the investment lifecycle: open, derived maturity,
//! claim, and the frozen-payout rule.

mod common;

use chrono::Duration;
use rust_decimal_macros::dec;

use coffer_core::investments::{InvestmentError, InvestmentServiceTrait, InvestmentStatus};
use coffer_core::money::Money;
use coffer_core::plans::{NewPlan, PlanError, PlanServiceTrait, PlanUpdate};
use coffer_core::transactions::{TransactionKind, TransactionServiceTrait, TransactionStatus};
use coffer_core::wallets::WalletError;
use coffer_core::Error;

use common::{balance_of, create_admin, create_funded_user, setup_engine, test_epoch, STARTER_PLAN_ID};

#[tokio::test(flavor = "multi_thread")]
async fn test_open_investment_locks_principal_and_freezes_payout() {
    let engine = setup_engine().await;
    let user = create_funded_user(&engine, "raju", 10_000).await;

    let investment = engine
        .investments
        .open_investment(&user, STARTER_PLAN_ID, Money::from_minor(10_000))
        .await
        .unwrap();

    assert_eq!(balance_of(&engine, &user), 0);
    assert_eq!(investment.status, InvestmentStatus::Active);
    assert_eq!(investment.amount.minor(), 10_000);
    // 10000 * (1 + 20/100) = 12000, frozen at open time
    assert_eq!(investment.payout.minor(), 12_000);
    assert_eq!(investment.start_at, test_epoch());
    assert_eq!(investment.end_at, test_epoch() + Duration::days(7));

    // The locked principal is logged as a completed investment row.
    let log_row = engine
        .transactions
        .list_transactions(&user)
        .unwrap()
        .into_iter()
        .find(|t| t.kind == TransactionKind::Investment)
        .expect("investment log row missing");
    assert_eq!(log_row.amount.minor(), 10_000);
    assert_eq!(log_row.status, TransactionStatus::Completed);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_open_below_plan_minimum_changes_nothing() {
    let engine = setup_engine().await;
    let user = create_funded_user(&engine, "raju", 10_000).await;

    let err = engine
        .investments
        .open_investment(&user, STARTER_PLAN_ID, Money::from_minor(5_000))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Investment(InvestmentError::BelowMinimum { .. })
    ));

    assert_eq!(balance_of(&engine, &user), 10_000);
    assert!(engine.investments.list_investments(&user).unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_open_with_insufficient_funds_creates_nothing() {
    let engine = setup_engine().await;
    let user = create_funded_user(&engine, "raju", 5_000).await;

    let err = engine
        .investments
        .open_investment(&user, STARTER_PLAN_ID, Money::from_minor(10_000))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Wallet(WalletError::InsufficientFunds { .. })
    ));

    // The failed debit rolled everything back: no investment, no log row.
    assert_eq!(balance_of(&engine, &user), 5_000);
    assert!(engine.investments.list_investments(&user).unwrap().is_empty());
    assert!(engine.transactions.list_transactions(&user).unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_open_against_missing_or_inactive_plan() {
    let engine = setup_engine().await;
    let user = create_funded_user(&engine, "raju", 50_000).await;
    let admin = create_admin(&engine, "admin").await;

    let err = engine
        .investments
        .open_investment(&user, "no-such-plan", Money::from_minor(10_000))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Plan(PlanError::NotFound(_))));

    engine
        .plans
        .update_plan(
            &admin,
            PlanUpdate {
                id: STARTER_PLAN_ID.to_string(),
                name: None,
                min_amount: None,
                return_percent: None,
                duration_days: None,
                is_active: Some(false),
            },
        )
        .await
        .unwrap();

    let err = engine
        .investments
        .open_investment(&user, STARTER_PLAN_ID, Money::from_minor(10_000))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Plan(PlanError::Inactive(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_claim_before_maturity_fails() {
    let engine = setup_engine().await;
    let user = create_funded_user(&engine, "raju", 10_000).await;

    let investment = engine
        .investments
        .open_investment(&user, STARTER_PLAN_ID, Money::from_minor(10_000))
        .await
        .unwrap();

    engine.clock.set(test_epoch() + Duration::days(7) - Duration::seconds(1));
    let err = engine
        .investments
        .claim_investment(&user, &investment.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Investment(InvestmentError::NotMatured(_))
    ));
    assert_eq!(balance_of(&engine, &user), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_claim_at_exactly_the_end_timestamp_succeeds() {
    let engine = setup_engine().await;
    let user = create_funded_user(&engine, "raju", 10_000).await;

    let investment = engine
        .investments
        .open_investment(&user, STARTER_PLAN_ID, Money::from_minor(10_000))
        .await
        .unwrap();

    // The maturity boundary is inclusive.
    engine.clock.set(investment.end_at);
    let claimed = engine
        .investments
        .claim_investment(&user, &investment.id)
        .await
        .unwrap();

    assert_eq!(claimed.status, InvestmentStatus::Completed);
    assert_eq!(balance_of(&engine, &user), 12_000);

    // The payout is logged as a completed payout row.
    let log_row = engine
        .transactions
        .list_transactions(&user)
        .unwrap()
        .into_iter()
        .find(|t| t.kind == TransactionKind::Payout)
        .expect("payout log row missing");
    assert_eq!(log_row.amount.minor(), 12_000);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_second_claim_fails_already_claimed() {
    let engine = setup_engine().await;
    let user = create_funded_user(&engine, "raju", 10_000).await;

    let investment = engine
        .investments
        .open_investment(&user, STARTER_PLAN_ID, Money::from_minor(10_000))
        .await
        .unwrap();

    engine.clock.advance(Duration::days(8));
    engine
        .investments
        .claim_investment(&user, &investment.id)
        .await
        .unwrap();

    let err = engine
        .investments
        .claim_investment(&user, &investment.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Investment(InvestmentError::AlreadyClaimed(_))
    ));

    // The payout was credited exactly once.
    assert_eq!(balance_of(&engine, &user), 12_000);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_claiming_someone_elses_investment_is_not_found() {
    let engine = setup_engine().await;
    let owner = create_funded_user(&engine, "raju", 10_000).await;
    let other = create_funded_user(&engine, "priya", 10_000).await;

    let investment = engine
        .investments
        .open_investment(&owner, STARTER_PLAN_ID, Money::from_minor(10_000))
        .await
        .unwrap();

    engine.clock.advance(Duration::days(8));
    let err = engine
        .investments
        .claim_investment(&other, &investment.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Investment(InvestmentError::NotFound(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_listing_derives_the_matured_flag() {
    let engine = setup_engine().await;
    let user = create_funded_user(&engine, "raju", 10_000).await;

    engine
        .investments
        .open_investment(&user, STARTER_PLAN_ID, Money::from_minor(10_000))
        .await
        .unwrap();

    let listing = engine.investments.list_investments(&user).unwrap();
    assert_eq!(listing.len(), 1);
    assert!(!listing[0].matured);
    assert_eq!(listing[0].plan_name, "Starter 7D 20%");

    engine.clock.advance(Duration::days(7));
    let listing = engine.investments.list_investments(&user).unwrap();
    assert!(listing[0].matured);
    // Maturity is derived at read time; the stored status is unchanged.
    assert_eq!(listing[0].status, InvestmentStatus::Active);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_plan_edits_never_touch_open_investments() {
    let engine = setup_engine().await;
    let user = create_funded_user(&engine, "raju", 10_000).await;
    let admin = create_admin(&engine, "admin").await;

    let investment = engine
        .investments
        .open_investment(&user, STARTER_PLAN_ID, Money::from_minor(10_000))
        .await
        .unwrap();

    engine
        .plans
        .update_plan(
            &admin,
            PlanUpdate {
                id: STARTER_PLAN_ID.to_string(),
                name: None,
                min_amount: None,
                return_percent: Some(dec!(50)),
                duration_days: Some(30),
                is_active: None,
            },
        )
        .await
        .unwrap();

    // The payout and end date were captured at open time.
    engine.clock.set(investment.end_at);
    let claimed = engine
        .investments
        .claim_investment(&user, &investment.id)
        .await
        .unwrap();
    assert_eq!(claimed.payout.minor(), 12_000);
    assert_eq!(balance_of(&engine, &user), 12_000);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_balance_is_conserved_across_a_mixed_sequence() {
    let engine = setup_engine().await;
    let user = create_funded_user(&engine, "raju", 50_000).await;
    let admin = create_admin(&engine, "admin").await;

    let deposit = engine
        .transactions
        .request_deposit(&user, Money::from_minor(25_000))
        .await
        .unwrap();
    engine
        .transactions
        .approve_deposit(&admin, &deposit.id)
        .await
        .unwrap();

    let withdraw = engine
        .transactions
        .request_withdraw(&user, Money::from_minor(10_000))
        .await
        .unwrap();
    engine
        .transactions
        .approve_withdraw(&admin, &withdraw.id)
        .await
        .unwrap();

    let investment = engine
        .investments
        .open_investment(&user, STARTER_PLAN_ID, Money::from_minor(20_000))
        .await
        .unwrap();
    engine.clock.advance(Duration::days(7));
    engine
        .investments
        .claim_investment(&user, &investment.id)
        .await
        .unwrap();

    // 50000 + 25000 - 10000 - 20000 + 24000, integer arithmetic with no
    // drift.
    assert_eq!(balance_of(&engine, &user), 69_000);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_plan_catalog_lists_only_active_plans() {
    let engine = setup_engine().await;
    let admin = create_admin(&engine, "admin").await;

    assert_eq!(engine.plans.list_plans().unwrap().len(), 3);

    engine
        .plans
        .update_plan(
            &admin,
            PlanUpdate {
                id: STARTER_PLAN_ID.to_string(),
                name: None,
                min_amount: None,
                return_percent: None,
                duration_days: None,
                is_active: Some(false),
            },
        )
        .await
        .unwrap();

    let active = engine.plans.list_plans().unwrap();
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|p| p.id != STARTER_PLAN_ID));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_plan_validates_and_lists() {
    let engine = setup_engine().await;
    let admin = create_admin(&engine, "admin").await;
    let user = create_funded_user(&engine, "raju", 0).await;

    let err = engine
        .plans
        .create_plan(
            &admin,
            NewPlan {
                id: None,
                name: "  ".to_string(),
                min_amount: Money::from_minor(10_000),
                return_percent: dec!(10),
                duration_days: 10,
                is_active: true,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Plan(PlanError::Invalid(_))));

    let plan = engine
        .plans
        .create_plan(
            &admin,
            NewPlan {
                id: None,
                name: "Festival 10D 10%".to_string(),
                min_amount: Money::from_minor(5_000),
                return_percent: dec!(10),
                duration_days: 10,
                is_active: true,
            },
        )
        .await
        .unwrap();
    assert_eq!(engine.plans.list_plans().unwrap().len(), 4);

    // Plan administration is admin only.
    let err = engine
        .plans
        .update_plan(
            &user,
            PlanUpdate {
                id: plan.id,
                name: None,
                min_amount: None,
                return_percent: None,
                duration_days: None,
                is_active: Some(false),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Forbidden));
}
