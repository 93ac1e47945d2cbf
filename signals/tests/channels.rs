use reactive_signal::*;

#[test]
fn test_std_channel_observer() {
    let signal = Signal::new('a');
    let (tx, rx) = std::sync::mpsc::channel::<char>();
    signal.observe_with(tx);
    signal.set('b');
    signal.set_value('c');
    assert_eq!(rx.try_iter().collect::<String>(), "abc");
}

#[cfg(feature = "tokio")]
#[tokio::test]
async fn test_tokio_channel_observer() {
    let signal = Signal::new(1);
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<i32>();
    signal.observe_with(tx);
    assert_eq!(rx.recv().await, Some(1));

    let writer = {
        let signal = signal.clone();
        tokio::spawn(async move {
            for _ in 0..3 {
                signal.update(|prev| prev * 2);
                tokio::task::yield_now().await;
            }
        })
    };

    let mut received = Vec::new();
    while received.len() < 3 {
        received.push(rx.recv().await.unwrap());
    }
    writer.await.unwrap();
    assert_eq!(received, [2, 4, 8]);
}

#[cfg(feature = "tokio")]
#[tokio::test]
async fn test_wait_for_value() {
    let signal = Signal::new(0);
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<i32>();
    signal.observe_with(tx);

    let writer = {
        let signal = signal.clone();
        tokio::spawn(async move {
            tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
            signal.set(42);
        })
    };

    let value = tokio::time::timeout(tokio::time::Duration::from_secs(1), async {
        loop {
            match rx.recv().await {
                Some(42) => break 42,
                Some(_) => continue,
                None => unreachable!("the signal holds the sender"),
            }
        }
    })
    .await
    .unwrap();
    assert_eq!(value, 42);
    writer.await.unwrap();
}
