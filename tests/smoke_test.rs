use daily_limit::{init, today_cash_remained, Aggregator, Clock, Entry, SystemClock};

#[test]
fn system_clock_smoke() {
    init();

    let clock = SystemClock;
    let mut aggregator = Aggregator::new(1000.0);
    aggregator.add_record(Entry::new(100.0, "Shopping"));
    aggregator.add_record(Entry::parse(100.0, "Groceries", Some("21.08.2020")).unwrap());

    let today = clock.today();
    assert_eq!(aggregator.today_stats(today), 100.0);
    assert_eq!(
        today_cash_remained(&aggregator, today, "rub").to_string(),
        "На сегодня осталось 900.00 руб"
    );
}
