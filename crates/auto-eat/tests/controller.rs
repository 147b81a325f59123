use auto_eat::catalog::items;
use auto_eat::{
    AutoEat, AutoEatConfig, ExclusionSet, HostCall, ItemCatalog, SimHost, SimRules, StopReason,
    TickOutcome, VanillaCatalog, Verdict, DEFAULT_SIBLINGS,
};
use eat_core::{ItemId, SharedTraceSink, Slot, TickContext, TraceKind};

const KILL_AURA: eat_core::SiblingId = DEFAULT_SIBLINGS[0];

fn stack(id: ItemId, count: u32) -> eat_core::ItemStack {
    VanillaCatalog.stack(id, count)
}

fn hungry_host() -> SimHost {
    let mut host = SimHost::new(SimRules {
        eat_ticks: 3,
        ..SimRules::frozen()
    })
    .with_vitals(20.0, 10)
    .with_hotbar(0, stack(items::DIAMOND_SWORD, 1))
    .with_hotbar(4, stack(items::BREAD, 2));
    host.selected = 2;
    host
}

/// Tick the controller and then the host until `done` or `limit` ticks pass.
fn run_until(
    controller: &mut AutoEat,
    host: &mut SimHost,
    mut ctx: TickContext,
    limit: u64,
    mut done: impl FnMut(TickOutcome) -> bool,
) -> (TickContext, TickOutcome) {
    for _ in 0..limit {
        let outcome = controller.on_tick(&ctx, host);
        host.step(&ctx);
        ctx = ctx.next();
        if done(outcome) {
            return (ctx, outcome);
        }
    }
    panic!("condition not reached within {limit} ticks");
}

#[test]
fn full_session_restores_hand_input_and_siblings() {
    let mut host = hungry_host().with_sibling(KILL_AURA, true);
    host.navigating = true;
    let mut controller = AutoEat::default();

    let first = controller.on_tick(&TickContext::new(0), &mut host);
    assert_eq!(first, TickOutcome::Started(Slot::Hotbar(4)));
    assert!(controller.is_active());
    assert_eq!(controller.previous_slot(), Some(Slot::Hotbar(2)));
    assert_eq!(controller.current_slot(), Some(Slot::Hotbar(4)));
    assert_eq!(controller.suspended_siblings(), &[KILL_AURA]);
    assert!(controller.suspended_pathing());
    assert_eq!(host.selected, 4);
    assert!(host.use_held);
    host.step(&TickContext::new(0));

    let (_, last) = run_until(&mut controller, &mut host, TickContext::new(1), 200, |o| {
        matches!(o, TickOutcome::Stopped(_))
    });

    assert_eq!(last, TickOutcome::Stopped(StopReason::OutOfFood));
    assert_eq!(host.eaten, vec![items::BREAD, items::BREAD]);
    assert_eq!(host.food_level, 20);
    assert_eq!(host.selected, 2);
    assert!(!host.use_held);
    assert!(host.sibling_active(KILL_AURA));
    assert!(!host.pathing_paused);
    assert!(!controller.is_active());
    assert!(controller.suspended_siblings().is_empty());
    assert!(!controller.suspended_pathing());
    assert_eq!(controller.current_slot(), None);
}

#[test]
fn stops_when_satisfied_before_food_runs_out() {
    let mut host = hungry_host().with_hotbar(4, stack(items::BREAD, 10));
    let mut controller = AutoEat::default();

    let (_, last) = run_until(&mut controller, &mut host, TickContext::new(0), 200, |o| {
        matches!(o, TickOutcome::Stopped(_))
    });

    // 10 + 5 = 15 is still hungry, 20 is full.
    assert_eq!(last, TickOutcome::Stopped(StopReason::Satisfied));
    assert_eq!(host.eaten.len(), 2);
    assert_eq!(host.hotbar[4].as_ref().map(|s| s.count), Some(8));
    assert_eq!(host.selected, 2);
}

#[test]
fn hungry_without_food_never_starts() {
    let mut host = hungry_host();
    host.hotbar[4] = None;
    let mut controller = AutoEat::default();

    for tick in 0..5 {
        assert_eq!(
            controller.on_tick(&TickContext::new(tick), &mut host),
            TickOutcome::Idle
        );
    }
    assert_eq!(controller.evaluate(&host), Verdict::NoFood);
    assert!(!controller.is_active());
    assert!(host.calls.is_empty());
}

#[test]
fn only_blacklisted_food_never_starts() {
    let mut host = hungry_host().with_hotbar(4, stack(items::ROTTEN_FLESH, 16));
    let mut controller = AutoEat::default();

    assert_eq!(
        controller.on_tick(&TickContext::new(0), &mut host),
        TickOutcome::Idle
    );
    assert!(host.calls.is_empty());
}

#[test]
fn exclusive_consumer_blocks_the_whole_tick() {
    let mut host = hungry_host().with_sibling(KILL_AURA, true);
    host.exclusive_busy = true;
    let sink = SharedTraceSink::default();
    let mut controller = AutoEat::default().with_trace_sink(Box::new(sink.clone()));

    assert_eq!(
        controller.on_tick(&TickContext::new(0), &mut host),
        TickOutcome::Yielded
    );
    assert!(!controller.is_active());
    assert!(host.calls.is_empty());
    assert!(host.sibling_active(KILL_AURA));
    assert_eq!(sink.tags(), vec!["eat.yield"]);

    host.exclusive_busy = false;
    assert_eq!(
        controller.on_tick(&TickContext::new(1), &mut host),
        TickOutcome::Started(Slot::Hotbar(4))
    );
}

#[test]
fn exclusive_consumer_pauses_an_active_session_without_reasserting() {
    let mut host = hungry_host();
    let mut controller = AutoEat::default();
    controller.on_tick(&TickContext::new(0), &mut host);
    host.clear_calls();

    host.exclusive_busy = true;
    host.release_use_input();
    assert_eq!(
        controller.on_tick(&TickContext::new(1), &mut host),
        TickOutcome::Yielded
    );
    assert!(controller.is_active());
    assert!(host.calls.is_empty());
    assert!(!host.use_held);
}

#[test]
fn full_hunger_only_eats_always_edible_food() {
    let config = AutoEatConfig {
        blacklist: ExclusionSet::new(),
        ..AutoEatConfig::default()
    };
    let mut host = hungry_host().with_vitals(6.0, 20);
    let mut controller = AutoEat::new(config);
    assert_eq!(controller.evaluate(&host), Verdict::NotHungry);

    // Bread (5) still outranks the golden apple (4), and bread cannot be eaten while full.
    host.hotbar[7] = Some(stack(items::GOLDEN_APPLE, 1));
    assert_eq!(
        controller.on_tick(&TickContext::new(0), &mut host),
        TickOutcome::Idle
    );

    host.hotbar[4] = None;
    assert_eq!(
        controller.on_tick(&TickContext::new(1), &mut host),
        TickOutcome::Started(Slot::Hotbar(7))
    );
}

#[test]
fn forced_stop_while_idle_is_a_no_op() {
    let mut host = hungry_host().with_vitals(20.0, 20);
    host.navigating = true;
    let mut controller = AutoEat::default();

    controller.deactivate(&TickContext::new(0), &mut host);
    controller.deactivate(&TickContext::new(1), &mut host);

    assert!(host.calls.is_empty());
    assert!(!controller.is_active());
}

#[test]
fn forced_stop_mid_session_reverses_everything_once() {
    let mut host = hungry_host().with_sibling(KILL_AURA, true);
    host.navigating = true;
    let mut controller = AutoEat::default();
    controller.on_tick(&TickContext::new(0), &mut host);
    host.clear_calls();

    controller.deactivate(&TickContext::new(1), &mut host);
    assert_eq!(
        host.calls,
        vec![
            HostCall::SelectHotbar(2),
            HostCall::SetUseHeld(false),
            HostCall::ToggleSibling(KILL_AURA),
            HostCall::ResumePathing,
        ]
    );
    assert!(!controller.is_active());
    assert!(controller.suspended_siblings().is_empty());
    assert!(!controller.suspended_pathing());

    host.clear_calls();
    controller.deactivate(&TickContext::new(2), &mut host);
    assert!(host.calls.is_empty());
}

#[test]
fn switches_turned_off_mid_session_skip_their_resume() {
    let mut host = hungry_host().with_sibling(KILL_AURA, true);
    host.navigating = true;
    let mut controller = AutoEat::default();
    controller.on_tick(&TickContext::new(0), &mut host);
    assert_eq!(controller.suspended_siblings(), &[KILL_AURA]);
    assert!(controller.suspended_pathing());
    host.clear_calls();

    controller.config_mut().pause_siblings = false;
    controller.config_mut().pause_pathing = false;
    controller.deactivate(&TickContext::new(1), &mut host);

    assert_eq!(
        host.calls,
        vec![HostCall::SelectHotbar(2), HostCall::SetUseHeld(false)]
    );
    assert!(!host.sibling_active(KILL_AURA));
    assert!(host.pathing_paused);
    assert!(controller.suspended_siblings().is_empty());
    // Still recorded: turning the switch back on lets the next meal release it.
    assert!(controller.suspended_pathing());

    controller.config_mut().pause_pathing = true;
    controller.on_tick(&TickContext::new(2), &mut host);
    assert!(!host.calls.contains(&HostCall::PausePathing));
    host.clear_calls();
    controller.deactivate(&TickContext::new(3), &mut host);
    assert!(host.calls.contains(&HostCall::ResumePathing));
    assert!(!host.pathing_paused);
    assert!(!controller.suspended_pathing());
}

#[test]
fn session_started_from_held_offhand_does_not_restore_a_hotbar_slot() {
    let mut host = hungry_host();
    host.main_is_offhand = true;
    let mut controller = AutoEat::default();

    assert_eq!(
        controller.on_tick(&TickContext::new(0), &mut host),
        TickOutcome::Started(Slot::Hotbar(4))
    );
    assert_eq!(controller.previous_slot(), Some(Slot::OffHand));
    host.clear_calls();

    controller.deactivate(&TickContext::new(1), &mut host);

    assert_eq!(host.calls, vec![HostCall::SetUseHeld(false)]);
    assert_eq!(host.selected, 4);
    assert!(!controller.is_active());
}

#[test]
fn reasserts_hand_and_input_every_tick() {
    let mut host = hungry_host();
    let mut controller = AutoEat::default();
    controller.on_tick(&TickContext::new(0), &mut host);

    // The host moves the hand and drops the input behind our back.
    host.selected = 7;
    host.release_use_input();
    host.clear_calls();

    assert_eq!(
        controller.on_tick(&TickContext::new(1), &mut host),
        TickOutcome::Continued(Slot::Hotbar(4))
    );
    assert_eq!(
        host.calls,
        vec![
            HostCall::SelectHotbar(4),
            HostCall::SetUseHeld(true),
            HostCall::UseItem,
        ]
    );
    assert!(host.use_held);
    // Previous slot is still the one from before the meal.
    assert_eq!(controller.previous_slot(), Some(Slot::Hotbar(2)));
}

#[test]
fn use_attempt_is_not_repeated_while_mid_use() {
    let mut host = hungry_host();
    let mut controller = AutoEat::default();
    controller.on_tick(&TickContext::new(0), &mut host);
    host.step(&TickContext::new(0));
    host.clear_calls();

    controller.on_tick(&TickContext::new(1), &mut host);
    assert_eq!(
        host.calls,
        vec![HostCall::SelectHotbar(4), HostCall::SetUseHeld(true)]
    );
}

#[test]
fn finished_stack_switches_to_next_food() {
    let mut host = hungry_host()
        .with_hotbar(1, stack(items::BREAD, 1))
        .with_hotbar(5, stack(items::BREAD, 1));
    host.hotbar[4] = None;
    host.food_level = 2;
    let sink = SharedTraceSink::default();
    let mut controller = AutoEat::default().with_trace_sink(Box::new(sink.clone()));

    assert_eq!(
        controller.on_tick(&TickContext::new(0), &mut host),
        TickOutcome::Started(Slot::Hotbar(1))
    );
    host.step(&TickContext::new(0));

    let (_, outcome) = run_until(&mut controller, &mut host, TickContext::new(1), 50, |o| {
        o == TickOutcome::Continued(Slot::Hotbar(5))
    });
    assert_eq!(outcome, TickOutcome::Continued(Slot::Hotbar(5)));
    assert_eq!(host.selected, 5);
    assert_eq!(host.hotbar[1], None);

    let events = sink.events();
    let swap = events.iter().find(|e| e.kind == TraceKind::Swap).unwrap();
    assert_eq!(swap.a, 5);
    assert_eq!(swap.b, 1);
}

#[test]
fn offhand_meal_never_selects_a_hotbar_slot_until_restore() {
    let mut host = hungry_host().with_offhand(stack(items::COOKED_BEEF, 1));
    host.hotbar[4] = None;
    host.selected = 3;
    let mut controller = AutoEat::default();

    assert_eq!(
        controller.on_tick(&TickContext::new(0), &mut host),
        TickOutcome::Started(Slot::OffHand)
    );
    assert_eq!(host.using_slot(), Some(Slot::OffHand));
    host.step(&TickContext::new(0));

    let (_, last) = run_until(&mut controller, &mut host, TickContext::new(1), 50, |o| {
        matches!(o, TickOutcome::Stopped(_))
    });
    assert_eq!(last, TickOutcome::Stopped(StopReason::OutOfFood));
    assert_eq!(host.eaten, vec![items::COOKED_BEEF]);

    let selects: Vec<_> = host
        .calls
        .iter()
        .filter(|c| matches!(c, HostCall::SelectHotbar(_)))
        .collect();
    assert_eq!(selects, vec![&HostCall::SelectHotbar(3)]);
    assert_eq!(host.selected, 3);
}

#[test]
fn sibling_toggled_externally_mid_session_is_not_double_toggled() {
    let mut host = hungry_host().with_sibling(KILL_AURA, true);
    let mut controller = AutoEat::default();
    controller.on_tick(&TickContext::new(0), &mut host);
    assert!(!host.sibling_active(KILL_AURA));

    host.set_sibling_active(KILL_AURA, false);
    host.set_sibling_active(KILL_AURA, true);

    controller.deactivate(&TickContext::new(1), &mut host);

    let toggles = host
        .calls
        .iter()
        .filter(|c| matches!(c, HostCall::ToggleSibling(_)))
        .count();
    assert_eq!(toggles, 1);
    assert!(host.sibling_active(KILL_AURA));
}

#[test]
fn sibling_enabled_mid_session_is_left_running() {
    let mut host = hungry_host().with_sibling(KILL_AURA, false);
    let mut controller = AutoEat::default();
    controller.on_tick(&TickContext::new(0), &mut host);
    assert!(controller.suspended_siblings().is_empty());

    host.set_sibling_active(KILL_AURA, true);
    controller.deactivate(&TickContext::new(1), &mut host);

    assert!(host.sibling_active(KILL_AURA));
    assert!(!host.calls.contains(&HostCall::ToggleSibling(KILL_AURA)));
}

#[test]
fn custom_sibling_list_is_respected() {
    let miner = eat_core::SiblingId("auto-miner");
    let mut host = hungry_host()
        .with_sibling(KILL_AURA, true)
        .with_sibling(miner, true);
    let mut controller = AutoEat::default().with_siblings(vec![miner]);

    controller.on_tick(&TickContext::new(0), &mut host);
    assert_eq!(controller.suspended_siblings(), &[miner]);
    assert!(host.sibling_active(KILL_AURA));
    assert!(!host.sibling_active(miner));
}

#[test]
fn sibling_list_is_kept_while_eating() {
    let miner = eat_core::SiblingId("auto-miner");
    let mut host = hungry_host()
        .with_sibling(KILL_AURA, true)
        .with_sibling(miner, true);
    let mut controller = AutoEat::default();
    controller.on_tick(&TickContext::new(0), &mut host);

    let mut controller = controller.with_siblings(vec![miner]);
    assert_eq!(controller.suspended_siblings(), &[KILL_AURA]);

    controller.deactivate(&TickContext::new(1), &mut host);
    assert!(host.sibling_active(KILL_AURA));
    assert!(host.sibling_active(miner));
    assert!(!host.calls.contains(&HostCall::ToggleSibling(miner)));
}

#[test]
fn use_target_is_cleared_only_while_eating() {
    let mut host = hungry_host();
    let mut controller = AutoEat::default();
    assert_eq!(controller.filter_use_target(Some("block")), Some("block"));

    controller.on_tick(&TickContext::new(0), &mut host);
    assert_eq!(controller.filter_use_target(Some("block")), None);

    controller.deactivate(&TickContext::new(1), &mut host);
    assert_eq!(controller.filter_use_target(Some("block")), Some("block"));
}

#[test]
fn trace_records_session_lifecycle() {
    let mut host = hungry_host().with_sibling(KILL_AURA, true);
    host.navigating = true;
    let sink = SharedTraceSink::default();
    let mut controller = AutoEat::default().with_trace_sink(Box::new(sink.clone()));

    controller.on_tick(&TickContext::new(3), &mut host);
    controller.deactivate(&TickContext::new(4), &mut host);

    let events = sink.events();
    assert_eq!(
        sink.tags(),
        vec![
            "eat.sibling_suspended",
            "eat.pathing_paused",
            "eat.start",
            "eat.sibling_resumed",
            "eat.pathing_resumed",
            "eat.stop",
        ]
    );
    assert_eq!(events[2].tick, 3);
    assert_eq!(events[2].a, 4);
    assert_eq!(events[2].b, 2);
    assert_eq!(events[5].a, StopReason::Deactivated as u64);
}
