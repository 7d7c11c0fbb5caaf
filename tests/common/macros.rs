/// Asserts every agent's vitals and position are inside their allowed ranges.
#[macro_export]
macro_rules! assert_agents_bounded {
    ($world:expr) => {
        for agent in &$world.agents {
            assert!(
                agent.vitals.hp >= 0.0 && agent.vitals.hp <= agent.stats.max_hp,
                "Agent {} hp {} outside [0, {}]",
                agent.identity.id,
                agent.vitals.hp,
                agent.stats.max_hp
            );
            assert!(
                agent.vitals.energy >= 0.0 && agent.vitals.energy <= agent.stats.max_energy,
                "Agent {} energy {} outside [0, {}]",
                agent.identity.id,
                agent.vitals.energy,
                agent.stats.max_energy
            );
            assert!(
                agent.vitals.age <= agent.stats.max_age,
                "Agent {} age {} past max {}",
                agent.identity.id,
                agent.vitals.age,
                agent.stats.max_age
            );
            assert!(
                agent.position.x >= 0.0 && agent.position.x < f64::from($world.width),
                "Agent {} x {} out of bounds",
                agent.identity.id,
                agent.position.x
            );
            assert!(
                agent.position.y >= 0.0 && agent.position.y < f64::from($world.height),
                "Agent {} y {} out of bounds",
                agent.identity.id,
                agent.position.y
            );
        }
    };
}

/// Asserts that no agent with the given ID remains in the world.
#[macro_export]
macro_rules! assert_agent_removed {
    ($world:expr, $id:expr) => {
        assert!(
            $world.agent($id).is_none(),
            "Agent {} should have been removed",
            $id
        );
    };
}
