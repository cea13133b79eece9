pub mod d400_order_report;
