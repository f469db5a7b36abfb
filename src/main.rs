fn main() {
    bullet_emitter::game::run();
}
