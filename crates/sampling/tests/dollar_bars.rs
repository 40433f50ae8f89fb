//! Dollar bar family: threshold, imbalance and run triggers counted in notional

mod common;

use bartender_ports::SamplingPolicy;
use bartender_sampling::{InformationBars, ThresholdConfig, Trigger};
use common::*;
use rust_decimal_macros::dec;

#[test]
fn test_dollar_threshold() {
    let _ = env_logger::try_init();

    let mut policy = InformationBars::dollar(&ThresholdConfig::new(500)).unwrap();
    // 200 + 303 crosses 500, 408 is left over
    let trades = vec![
        buy(dec!(100), dec!(2), 0),
        sell(dec!(101), dec!(3), 30),
        buy(dec!(102), dec!(4), 60),
    ];

    let bars = run(&mut policy, &trades);
    assert_eq!(bars.len(), 2);

    assert_eq!(bars[0].volume, dec!(5));
    assert_eq!(bars[0].buy_volume, dec!(2));
    assert_eq!(bars[0].sell_volume, dec!(3));
    assert_eq!(bars[0].close, dec!(101));

    assert_eq!(bars[1].volume, dec!(4));
    assert_eq!(bars[1].start, at(60));
}

#[test]
fn test_dollar_threshold_not_reached() {
    let mut policy = InformationBars::dollar(&ThresholdConfig::new(10_000)).unwrap();
    let bars = run(
        &mut policy,
        &[buy(dec!(100), dec!(2), 0), buy(dec!(100), dec!(2), 1)],
    );

    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].ticks, 2);
}

#[test]
fn test_dollar_imbalance() {
    let mut policy = InformationBars::dollar_imbalance(&ThresholdConfig::new(250)).unwrap();
    // -200 (sell seed), +101, -300
    let trades = vec![
        sell(dec!(100), dec!(2), 0),
        buy(dec!(101), dec!(1), 1),
        sell(dec!(100), dec!(3), 2),
    ];

    let mut emitted = Vec::new();
    for trade in &trades[..2] {
        emitted.extend(policy.on_trade(trade));
    }
    assert!(emitted.is_empty());
    assert_eq!(policy.trigger(), &Trigger::Imbalance { net: dec!(-99) });

    emitted.extend(policy.on_trade(&trades[2]));
    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].ticks, 3);
    assert_eq!(emitted[0].volume, dec!(6));
}

#[test]
fn test_dollar_run() {
    let mut policy = InformationBars::dollar_run(&ThresholdConfig::new(1000)).unwrap();
    // first print only sets the reference price; 550 + 600 crosses 1000
    let trades = vec![
        buy(dec!(10), dec!(10), 0),
        buy(dec!(11), dec!(50), 1),
        buy(dec!(12), dec!(50), 2),
        buy(dec!(11), dec!(1), 3),
    ];

    let bars = run(&mut policy, &trades);
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].ticks, 3);
    assert_eq!(bars[0].volume, dec!(110));
    assert_eq!(bars[0].high, dec!(12));
    assert_eq!(bars[1].ticks, 1);
}

#[test]
fn test_dollar_run_fractional_notional() {
    let mut policy = InformationBars::dollar_run(&ThresholdConfig::new(dec!(0.3))).unwrap();
    // 0.10 + 0.11 + 0.12 on the upticks; the flat print adds nothing
    let trades = vec![
        buy(dec!(0.09), dec!(1), 0),
        buy(dec!(0.10), dec!(1), 1),
        buy(dec!(0.10), dec!(1), 2),
        buy(dec!(0.11), dec!(1), 3),
        buy(dec!(0.12), dec!(1), 4),
    ];

    let bars = run(&mut policy, &trades);
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].ticks, 5);
}

#[test]
fn test_dollar_imbalance_ignores_unchanged_price() {
    let mut policy = InformationBars::dollar_imbalance(&ThresholdConfig::new(1000)).unwrap();

    assert!(policy.on_trade(&buy(dec!(100), dec!(2), 0)).is_empty());
    assert!(policy.on_trade(&buy(dec!(100), dec!(50), 1)).is_empty());
    assert_eq!(policy.trigger(), &Trigger::Imbalance { net: dec!(200) });

    // -99 on the downtick, then another flat print
    assert!(policy.on_trade(&sell(dec!(99), dec!(1), 2)).is_empty());
    assert!(policy.on_trade(&sell(dec!(99), dec!(40), 3)).is_empty());
    assert_eq!(policy.trigger(), &Trigger::Imbalance { net: dec!(101) });
}
