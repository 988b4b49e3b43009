use wayfind_core::{Action, ActionOutcome, ActionStatus, TickContext, WorldMut, WorldView};

#[derive(Default)]
struct TestWorld {
    log: Vec<&'static str>,
    canceled: u32,
}

impl WorldView for TestWorld {
    type Agent = u64;
}

impl WorldMut for TestWorld {}

struct CountDown {
    remaining: u32,
}

impl Action<TestWorld> for CountDown {
    fn tick(&mut self, _ctx: &TickContext, _agent: u64, world: &mut TestWorld) -> ActionStatus {
        world.log.push("tick");
        if self.remaining == 0 {
            return ActionStatus::Success;
        }
        self.remaining -= 1;
        ActionStatus::Running
    }

    fn cancel(&mut self, _ctx: &TickContext, _agent: u64, world: &mut TestWorld) {
        world.canceled += 1;
    }
}

#[test]
fn action_runs_to_success() {
    let mut world = TestWorld::default();
    let mut action: Box<dyn Action<TestWorld>> = Box::new(CountDown { remaining: 2 });

    let mut status = ActionStatus::Running;
    let mut tick = 0u64;
    while status == ActionStatus::Running {
        status = action.tick(&TickContext::new(tick, 0.1), 1, &mut world);
        tick += 1;
        assert!(tick < 10, "action never finished");
    }

    assert_eq!(status, ActionStatus::Success);
    assert_eq!(status.outcome(), Some(ActionOutcome::Success));
    assert_eq!(world.log.len(), 3);
    assert_eq!(world.canceled, 0);
}

#[test]
fn cancel_reaches_the_world() {
    let mut world = TestWorld::default();
    let mut action: Box<dyn Action<TestWorld>> = Box::new(CountDown { remaining: 5 });

    action.tick(&TickContext::new(0, 0.1), 1, &mut world);
    action.cancel(&TickContext::new(1, 0.1), 1, &mut world);

    assert_eq!(world.canceled, 1);
}

#[test]
fn statuses_map_to_outcomes() {
    assert_eq!(ActionStatus::Running.outcome(), None);
    assert_eq!(ActionStatus::Success.outcome(), Some(ActionOutcome::Success));
    assert_eq!(ActionStatus::Failure.outcome(), Some(ActionOutcome::Failure));
    assert_eq!(ActionStatus::from(ActionOutcome::Failure), ActionStatus::Failure);
}
