use linked_store::collections::linked::{LinkedList, Node};

fn main() {
    println!("\n[LinkedList]\n");

    let mut list = LinkedList::new();
    println!("{:?}", list);

    for i in 0..8 {
        list.push_front(i);
        println!("{}", list);
    }

    list.reverse();
    println!("reversed: {}", list);

    list.insert(3, 100);
    println!("{:?}, {:?}", list.remove(5), list);

    println!("\n[Node]\n");

    let chain = Node::with_next(1, Node::with_next(2, Node::new(3)));
    println!("{}", chain);
    println!("{:?}", chain);

    let adopted = LinkedList::from(chain);
    println!("adopted {} elements", adopted.len());
}
