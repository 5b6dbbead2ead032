fn main() {
    calc::term::main()
}
