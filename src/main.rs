use abysswatch::loopback::ReplicaView;
use glam::vec3;
use server_core::{ArenaServer, PlayerId};

fn main() -> anyhow::Result<()> {
    // Developer-friendly default logging (info+) unless RUST_LOG overrides.
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,abysswatch=info"),
    )
    .format_timestamp_secs()
    .try_init();

    let cfg = data_runtime::configs::boss::BossCfg::load_default()?;
    let skills = data_runtime::specs::skills::SkillSpecDb::load_default()?;

    let mut srv = ArenaServer::new(cfg, skills.skills, 0xA55);
    let mut replicas: Vec<ReplicaView> = (0..2).map(|_| ReplicaView::new(srv.subscribe())).collect();

    let pid = srv.spawn_player(PlayerId(1), vec3(6.0, 0.0, 0.0), 300);
    srv.assign_target(pid);
    srv.begin();

    // Run a short scripted encounter at 20 Hz.
    let dt = 0.05f32;
    for frame in 0..400 {
        srv.tick(dt);
        for r in &mut replicas {
            r.reconcile();
        }
        if frame % 40 == 0 {
            log::info!(
                "t={:5.2}s state={:?} busy={} player_hp={}",
                srv.time(),
                srv.state_id().map(server_core::StateId::name),
                srv.skill_active(),
                srv.players.get(pid).map_or(0, |p| p.hp.hp),
            );
        }
        if srv.players.get(pid).map_or(true, |p| !p.hp.alive()) {
            log::info!("player down at t={:.2}s", srv.time());
            break;
        }
    }

    for (i, r) in replicas.iter().enumerate() {
        log::info!(
            "replica {i}: state={:?} busy={} target={:?}",
            r.state().map(server_core::StateId::name),
            r.skills.active,
            r.skills.target,
        );
        debug_assert_eq!(r.state(), srv.state_id());
    }
    Ok(())
}
