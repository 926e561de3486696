use dvfs_sched::energy::calculate_energy;
use dvfs_sched::models::{Task, TaskClass};
use dvfs_sched::scheduler::{get_metrics, schedule};
use dvfs_sched::simulation::Simulation;
use dvfs_sched::workload::random_tasks;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const EPS: f64 = 1e-9;

fn random_sets() -> Vec<Vec<Task>> {
    let mut rng = SmallRng::seed_from_u64(2024);
    (0..50).map(|n| random_tasks(&mut rng, n % 12)).collect()
}

#[test]
fn test_reference_scenario() {
    let tasks = vec![
        Task::foreground("P1", 0, 100),
        Task::background("P2", 50, 150),
        Task::background("P3", 100, 80),
    ];
    let mut scheduled = schedule(&tasks);

    assert_eq!(scheduled[0].start_ms, 0.0);
    assert_eq!(scheduled[0].completion_ms, 100.0);
    assert_eq!(scheduled[1].start_ms, 100.0);
    assert!((scheduled[1].completion_ms - 350.0).abs() < EPS);
    assert!((scheduled[2].start_ms - 350.0).abs() < EPS);
    assert!((scheduled[2].completion_ms - (350.0 + 80.0 / 0.6)).abs() < EPS);

    let report = calculate_energy(&mut scheduled);
    assert_eq!(report.total_standard, 330.0);
    assert!((report.total_dvfs - 238.0).abs() < EPS);
    assert!((report.savings_percent - 27.878_787_878).abs() < 1e-6);
}

#[test]
fn test_one_output_per_input() {
    for tasks in random_sets() {
        let scheduled = schedule(&tasks);
        assert_eq!(scheduled.len(), tasks.len());
        for task in &tasks {
            assert_eq!(scheduled.iter().filter(|s| s.id() == task.id).count(), 1);
        }
    }
}

#[test]
fn test_stable_arrival_order() {
    for tasks in random_sets() {
        let scheduled = schedule(&tasks);
        for pair in scheduled.windows(2) {
            let (a, b) = (&pair[0].task, &pair[1].task);
            assert!(a.arrival_ms <= b.arrival_ms);
            if a.arrival_ms == b.arrival_ms {
                let pos = |id: &str| tasks.iter().position(|t| t.id == id);
                assert!(pos(&a.id) < pos(&b.id));
            }
        }
    }
}

#[test]
fn test_cpu_never_double_booked() {
    for tasks in random_sets() {
        let scheduled = schedule(&tasks);
        for st in &scheduled {
            assert!(st.start_ms >= st.task.arrival_ms as f64);
            assert!(st.completion_ms >= st.start_ms + st.execution_ms - EPS);
        }
        for pair in scheduled.windows(2) {
            assert!(pair[1].start_ms >= pair[0].completion_ms);
            assert!(pair[1].completion_ms >= pair[0].completion_ms);
        }
    }
}

#[test]
fn test_class_energy_properties() {
    for tasks in random_sets() {
        let mut scheduled = schedule(&tasks);
        let report = calculate_energy(&mut scheduled);
        for (st, te) in scheduled.iter().zip(&report.tasks) {
            let burst = st.task.burst_ms as f64;
            match st.class() {
                TaskClass::Foreground => {
                    assert_eq!(st.execution_ms, burst);
                    assert_eq!(te.standard, burst);
                    assert_eq!(te.dvfs, burst);
                }
                TaskClass::Background => {
                    assert!(st.execution_ms > burst);
                    assert!((te.dvfs - burst * 0.6).abs() < EPS);
                    assert!(te.dvfs < te.standard);
                    assert_eq!(te.standard, burst);
                }
            }
            assert_eq!(st.energy_consumed, te.dvfs);
        }
        assert!(report.total_dvfs <= report.total_standard);
    }
}

#[test]
fn test_all_foreground_no_savings() {
    let tasks: Vec<Task> = (0..5)
        .map(|i| Task::foreground(format!("F{i}"), i * 10, 50 + i))
        .collect();
    let mut scheduled = schedule(&tasks);
    let report = calculate_energy(&mut scheduled);
    assert_eq!(report.savings_percent, 0.0);
}

#[test]
fn test_empty_input() {
    let mut scheduled = schedule(&[]);
    assert!(scheduled.is_empty());

    let report = calculate_energy(&mut scheduled);
    assert_eq!((report.total_standard, report.total_dvfs), (0.0, 0.0));
    assert_eq!(report.savings_percent, 0.0);

    let metrics = get_metrics(&scheduled);
    assert_eq!(metrics.avg_turnaround_ms, 0.0);
    assert_eq!(metrics.avg_waiting_ms, 0.0);
    assert_eq!(metrics.avg_response_ms, 0.0);
}

#[test]
fn test_rerun_is_identical() {
    for tasks in random_sets() {
        let sim = Simulation::default();
        assert_eq!(sim.run(&tasks), sim.run(&tasks));
    }
}

#[test]
fn test_report_serializes() {
    let report = Simulation::default().run(&dvfs_sched::workload::sample_tasks());
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"savings_percent\""));
    assert!(json.contains("\"P4\""));
}
