//! Walks the crate's surface end to end: parse Luco text, inspect and mutate
//! the tree, build one from scratch with the construction macros, then dump
//! it back out as Luco and JSON.

use luco::{luco_array, luco_object, IndentStyle, Node};

fn main() {
    println!("=== Luco Demo ===\n");

    println!("Parsing a flat document");
    let doc = Node::parse("name = \"cat\"\nage = 5\nweight = 4.2\nsmol = true\n").unwrap();
    println!("  name:   {}", doc.at("name").as_str());
    println!("  age:    {}", doc.at("age").as_i64());
    println!("  weight: {}", doc.at("weight").as_f64());
    println!("  smol:   {}\n", doc.at("smol").as_bool());

    println!("Parsing nested objects and an array of scalars");
    let nested = Node::parse(
        "pet {\n    name = \"dog\"\n    tags {\n        \"loud\"\n        \"good boy\"\n        3\n    }\n}\n",
    )
    .unwrap();
    println!(
        "  pet.name: {}, pet.tags[0]: {}, pet.tags[2]: {}\n",
        nested.at("pet").at("name").as_str(),
        nested.at("pet").at("tags").at_index(0).as_str(),
        nested.at("pet").at("tags").at_index(2).as_i64(),
    );

    println!("Mutating a tree in place");
    let mut tree = Node::default();
    tree.insert("scores", vec![1i64, 2, 3]).unwrap();
    println!("  scores[1] before: {}", tree.at("scores").at_index(1).as_i64());
    tree.at_mut("scores").at_index_mut(1).set(20i64);
    println!("  scores[1] after:  {}\n", tree.at("scores").at_index(1).as_i64());

    println!("Building a tree from a heterogeneous list");
    let mixed = luco_array![1.3223, 2, "string", true, ()];
    for item in mixed.as_array().iter() {
        println!("  {:>8}: {}", item.type_name(), item);
    }
    println!();

    println!("Merging two objects with `+` (right side wins on conflict)");
    let base = luco_object! { "x" => 1, "y" => 1 };
    let override_ = luco_object! { "y" => 2, "z" => 3 };
    let merged = base + override_;
    println!(
        "  x={}, y={}, z={}\n",
        merged.at("x").as_i64(),
        merged.at("y").as_i64(),
        merged.at("z").as_i64(),
    );

    println!("Serializing back to Luco and JSON");
    let doc = luco_object! {
        "name" => "cat",
        "age" => 5,
        "tags" => luco_array!["indoor", "lazy"],
    };
    println!("--- Luco ---\n{}", doc.to_luco_string(&IndentStyle::default()));
    println!("--- JSON ---\n{}", doc.to_json_string(&IndentStyle::default()));
}
