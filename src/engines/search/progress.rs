use super::engine::ProgressCallback;

pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        println!("Generation {} starting...", generation + 1);
    }

    fn on_candidate_evaluated(&mut self, candidate_num: usize, total: usize) {
        if candidate_num == total {
            println!("  Evaluated {}/{} candidates", candidate_num, total);
        }
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64) {
        println!(
            "Generation {} complete. Best fitness: {:.4}",
            generation + 1,
            best_fitness
        );
    }
}
