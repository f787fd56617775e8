// This file was autogenerated by `./crates gen`.
// See src/tasks/entry_points.rs for the actual code.

extern crate dmat_tasks;

fn main() {
    dmat_tasks::dmat_demo();
}
