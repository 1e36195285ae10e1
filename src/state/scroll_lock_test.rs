use super::*;

#[test]
fn engage_saves_current_overflow_once() {
    let mut lock = ScrollLock::default();
    assert!(lock.engage("scroll"));
    assert!(!lock.engage(LOCKED_OVERFLOW));
    assert_eq!(lock.release().as_deref(), Some("scroll"));
}

#[test]
fn release_without_engage_is_none() {
    let mut lock = ScrollLock::default();
    assert_eq!(lock.release(), None);
    assert!(!lock.is_locked());
}

#[test]
fn sync_freezes_when_first_modal_opens() {
    let mut lock = ScrollLock::default();
    assert_eq!(lock.sync(true, ""), ScrollChange::Freeze);
    assert!(lock.is_locked());
}

#[test]
fn sync_keeps_lock_while_modals_remain_open() {
    let mut lock = ScrollLock::default();
    lock.sync(true, "auto");
    assert_eq!(lock.sync(true, LOCKED_OVERFLOW), ScrollChange::None);
    assert!(lock.is_locked());
}

#[test]
fn sync_restores_saved_value_when_last_modal_closes() {
    let mut lock = ScrollLock::default();
    lock.sync(true, "auto");
    assert_eq!(lock.sync(false, LOCKED_OVERFLOW), ScrollChange::Restore("auto".to_owned()));
    assert_eq!(lock.sync(false, ""), ScrollChange::None);
}
