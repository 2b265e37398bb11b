use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use swatch_core::ColorScheme;
use swatch_theme::{ColorValue, Theme, ThemeStore, ThemedColor};

/// Theme whose background, foreground and divider all carry `marker` as alpha
fn marked_theme(marker: f32) -> Theme {
    let tint = ThemedColor::universal(ColorValue::rgba(10, 20, 30, marker));
    Theme::default().with(|t| {
        t.colors.background = tint.clone();
        t.colors.foreground = tint.clone();
        t.colors.divider = tint;
        t.layout.disabled_opacity = marker;
    })
}

fn marker_of(value: ColorValue) -> f32 {
    value.to_color().a
}

#[test]
fn readers_never_observe_a_mixed_theme() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let store = Arc::new(ThemeStore::new(marked_theme(0.0)));
    let done = Arc::new(AtomicBool::new(false));
    let checks = Arc::new(AtomicUsize::new(0));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            let done = Arc::clone(&done);
            let checks = Arc::clone(&checks);
            thread::spawn(move || {
                while !done.load(Ordering::Acquire) {
                    let theme = store.current();
                    let bg = marker_of(theme.colors.background.resolve(ColorScheme::Light));
                    let fg = marker_of(theme.colors.foreground.resolve(ColorScheme::Dark));
                    let divider = marker_of(theme.colors.divider.resolve(ColorScheme::Light));
                    assert_eq!(bg, fg);
                    assert_eq!(bg, divider);
                    assert_eq!(bg, theme.layout.disabled_opacity);
                    checks.fetch_add(1, Ordering::Relaxed);
                }
            })
        })
        .collect();

    for i in 1..=2_000 {
        store.replace(marked_theme((i % 100) as f32 / 100.0));
    }
    done.store(true, Ordering::Release);

    for reader in readers {
        reader.join().expect("reader thread panicked");
    }
    assert_eq!(store.generation(), 2_000);
    assert!(checks.load(Ordering::Relaxed) > 0);
}

#[test]
fn subscribers_see_every_generation_from_a_single_writer() {
    let store = ThemeStore::default();
    let last = Arc::new(AtomicUsize::new(0));
    let in_order = Arc::new(AtomicBool::new(true));

    {
        let last = Arc::clone(&last);
        let in_order = Arc::clone(&in_order);
        store.subscribe(move |change| {
            let previous = last.swap(change.generation as usize, Ordering::SeqCst);
            if previous + 1 != change.generation as usize {
                in_order.store(false, Ordering::SeqCst);
            }
        });
    }

    for _ in 0..50 {
        store.update(|t| t.layout.disabled_opacity *= 0.99);
    }

    assert_eq!(last.load(Ordering::SeqCst), 50);
    assert!(in_order.load(Ordering::SeqCst));
}

#[test]
fn last_notification_matches_the_store_with_two_writers() {
    let store = Arc::new(ThemeStore::new(marked_theme(0.0)));
    let delivered = Arc::new(Mutex::new(Vec::new()));
    let (entered_tx, entered_rx) = mpsc::channel();

    {
        let delivered = Arc::clone(&delivered);
        let entered_tx = Mutex::new(entered_tx);
        store.subscribe(move |change| {
            if change.generation == 1 {
                let _ = entered_tx.lock().unwrap().send(());
                // Give the second writer time to race past this notification
                thread::sleep(Duration::from_millis(200));
            }
            delivered
                .lock()
                .unwrap()
                .push((change.generation, change.current.layout.disabled_opacity));
        });
    }

    let first = {
        let store = Arc::clone(&store);
        thread::spawn(move || store.replace(marked_theme(0.1)))
    };
    entered_rx.recv().expect("first notification started");
    let second = {
        let store = Arc::clone(&store);
        thread::spawn(move || store.replace(marked_theme(0.2)))
    };
    first.join().unwrap();
    second.join().unwrap();

    let delivered = delivered.lock().unwrap();
    assert_eq!(*delivered, vec![(1, 0.1), (2, 0.2)]);
    let (last_generation, last_opacity) = delivered[delivered.len() - 1];
    assert_eq!(last_generation, store.generation());
    assert_eq!(last_opacity, store.current().layout.disabled_opacity);
}

#[test]
fn concurrent_updates_are_applied_in_order() {
    let store = Arc::new(ThemeStore::default());
    let generations = Arc::new(Mutex::new(Vec::new()));
    {
        let generations = Arc::clone(&generations);
        store.subscribe(move |change| generations.lock().unwrap().push(change.generation));
    }

    let writers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..100 {
                    store.update(|t| t.layout.disabled_opacity *= 0.999);
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    let generations = generations.lock().unwrap();
    assert_eq!(*generations, (1..=400).collect::<Vec<u64>>());
    assert_eq!(store.generation(), 400);
}

#[test]
fn subscriber_may_unsubscribe_itself() {
    let store = Arc::new(ThemeStore::default());
    let calls = Arc::new(AtomicUsize::new(0));
    let id_slot = Arc::new(Mutex::new(None));

    let id = {
        let store_ref = Arc::downgrade(&store);
        let calls = Arc::clone(&calls);
        let id_slot = Arc::clone(&id_slot);
        store.subscribe(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            if let (Some(store), Some(id)) = (store_ref.upgrade(), *id_slot.lock().unwrap()) {
                store.unsubscribe(id);
            }
        })
    };
    *id_slot.lock().unwrap() = Some(id);

    store.replace(Theme::default());
    store.replace(Theme::default());

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.subscriber_count(), 0);
}
