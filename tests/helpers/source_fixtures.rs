//! Common source code fixtures for tests.

// C#

pub const CLASS_WITH_FUNCTION: &str = "class Foo { int Bar() { return 1; } }";

pub const NAMESPACE_WITH_CLASS: &str = "namespace N { class C {} }";

pub const CLASS_MEMBERS: &str = r#"
using System;
using Col = System.Collections.Generic;

namespace Shop.Orders
{
    public class Order<T> : Base, IComparable<Order<T>> where T : new()
    {
        private const int MaxItems = 10, MinItems = 1;
        protected internal string name = "order";
        int count;

        public Order(int capacity) : base(capacity) { }
        ~Order() { }

        public int Count { get; private set; }
        public T this[int index] { get { return default; } }
        public event EventHandler Changed;

        public static Order<T> operator +(Order<T> a, Order<T> b) => a;
        public static implicit operator int(Order<T> o) => o.count;

        public void Add<U>(U item, bool check = true) where U : T
        {
            if (check) { count++; }
        }
    }

    public enum Status : byte { Open, Closed = 2, }

    public delegate void Handler(object sender);

    public record Point(int X, int Y);
}
"#;

// SystemVerilog

pub const MODULE_WITH_PORTS: &str = r#"module m(input a, output b);
  assign b = a;
endmodule
"#;

pub const COUNTER_MODULE: &str = r#"
module counter #(parameter WIDTH = 8) (
    input  logic clk,
    output logic [WIDTH-1:0] count
);
  localparam int MAX = 10, MIN = 0;
  logic a, b;
  typedef enum logic [1:0] { IDLE, RUN } state_t;
  sub u1 (.clk(clk));

  function automatic int add(int x, int y);
    return x + y;
  endfunction

  task run;
    fork
      a = 1;
    join_any
    wait fork;
  endtask

  always_ff @(posedge clk) begin
    count <= count + 1;
  end
endmodule
"#;

pub const CLASS_PACKAGE: &str = r#"
package pkg;
  parameter int N = 4;

  typedef class packet;

  class packet extends base;
    rand bit [7:0] data;
    `uvm_object_utils(packet)
    extern function void pack();
    function new();
    endfunction
  endclass : packet
endpackage
"#;
